use crate::common::*;

use crate::dto::{year_pair_row::*, year_value_row::*};
use crate::enums::institution_selection::*;

#[doc = r#"
    Reduces a filtered dataset view into one row per year.

    Reduction rule: sum for enrollment counts, arithmetic mean for attendance
    rates and scores. A single-institution selection is a passthrough by
    construction (one source row per year); duplicate rows, if any, reduce
    under the same rule. Output is ascending by year.
"#]
pub trait AggregationService: Send + Sync {
    #[doc = "Summed head count per year"]
    fn enrollment_series(
        &self,
        selection: &InstitutionSelection,
        years: Option<&BTreeSet<i32>>,
    ) -> Vec<YearValueRow>;

    #[doc = "Mean attendance per year, scaled to a 0-100 percentage with one decimal"]
    fn attendance_series(
        &self,
        selection: &InstitutionSelection,
        years: Option<&BTreeSet<i32>>,
    ) -> Vec<YearValueRow>;

    #[doc = "Mean reading/math points per year, one series per test level, rounded to whole points"]
    fn score_series(
        &self,
        selection: &InstitutionSelection,
        years: Option<&BTreeSet<i32>>,
    ) -> BTreeMap<String, Vec<YearPairRow>>;
}
