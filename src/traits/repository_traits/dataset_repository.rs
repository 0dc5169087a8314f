use crate::common::*;

use crate::enums::institution_selection::*;
use crate::model::record::{attendance_record::*, enrollment_record::*, score_record::*};

#[doc = r#"
    Read-only view over the three loaded datasets.

    Filters never fail: an unknown institution code or an empty year set
    yields an empty sequence, which downstream components treat as "this
    category produces no output". `years = None` means no year restriction
    (territorial rollups use it).
"#]
pub trait DatasetRepository: Send + Sync {
    fn filter_enrollment(
        &self,
        selection: &InstitutionSelection,
        years: Option<&BTreeSet<i32>>,
    ) -> Vec<EnrollmentRecord>;

    fn filter_attendance(
        &self,
        selection: &InstitutionSelection,
        years: Option<&BTreeSet<i32>>,
    ) -> Vec<AttendanceRecord>;

    fn filter_scores(
        &self,
        selection: &InstitutionSelection,
        years: Option<&BTreeSet<i32>>,
        level: Option<&str>,
    ) -> Vec<ScoreRecord>;

    #[doc = "Distinct institution codes across all three datasets, sorted"]
    fn institution_codes(&self) -> BTreeSet<String>;
}
