use crate::common::*;

#[doc = r#"
    One aggregated single-metric row: enrollment head count or attendance
    percentage for a year.

    Produced per request by the aggregation service, ascending by year;
    tabular views reverse the order. Discarded once the report context is
    built.
"#]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, new)]
pub struct YearValueRow {
    pub year: i32,
    pub value: f64,
}
