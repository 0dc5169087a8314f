use crate::common::*;

#[doc = "One aggregated score row for a (year, level): reading and math point averages"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, new)]
pub struct YearPairRow {
    pub year: i32,
    pub reading: f64,
    pub math: f64,
}
