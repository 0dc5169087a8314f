use crate::model::report::territorial_summary::*;

#[doc = r#"
    Computes the territorial summary: system-wide rollups of the two most
    recent years per category, independent of whatever the user selected.

    Invoked once per generation run; the result is shared by every
    institution's context.
"#]
pub trait SummaryService: Send + Sync {
    fn territorial_summary(&self) -> TerritorialSummary;
}
