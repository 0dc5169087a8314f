use crate::dto::year_value_row::*;

#[doc = r#"
    Turns a year-ordered aggregated series into a human-readable trend
    description.

    Pure and deterministic: fewer than two rows yield the empty string, a
    zero prior value yields a 0% clause, nothing ever errors.
"#]
pub trait NarrativeService: Send + Sync {
    #[doc = r#"
        One clause per (latest year, prior year) pair, nearest prior first,
        joined with `" · "`. Clause shape:
        `<metric> <direction> <abs(pct)>% relative to <priorYear>`.
    "#]
    fn trend_narrative(&self, rows: &[YearValueRow], metric: &str) -> String;
}
