use crate::dto::{year_pair_row::*, year_value_row::*};

#[doc = "How chart point labels and axis ticks are formatted"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    #[doc = "Percentage with one decimal, e.g. `93.5%`"]
    Percent,
    #[doc = "Thousands-grouped whole number, e.g. `12,340`"]
    Count,
}

#[doc = r#"
    Renders a year-ordered aggregated series into an encoded raster image.

    Every call allocates its own drawing surface and releases it before
    returning, on success and failure alike; the pipeline renders one chart
    per category per institution (plus one per test level) and surfaces must
    never be reused or leaked across calls. The result is a base64-encoded
    PNG held entirely in memory.
"#]
pub trait ChartService: Send + Sync {
    #[doc = "Single-metric line chart with circular markers and a label on every point"]
    fn render_single_series(
        &self,
        title: &str,
        rows: &[YearValueRow],
        color: (u8, u8, u8),
        format: ValueFormat,
    ) -> anyhow::Result<String>;

    #[doc = "Dual-metric (reading/math) line chart with a legend distinguishing the series"]
    fn render_dual_series(&self, title: &str, rows: &[YearPairRow]) -> anyhow::Result<String>;
}
