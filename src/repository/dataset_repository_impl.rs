use crate::common::*;

use crate::enums::institution_selection::*;
use crate::model::configs::dataset_config::*;
use crate::model::record::{attendance_record::*, enrollment_record::*, score_record::*};
use crate::traits::repository_traits::dataset_repository::*;
use crate::utils_modules::io_utils::*;

#[doc = r#"
    In-memory repository over the three schema-normalized record collections.

    The collections are immutable once loaded; every filter returns owned
    copies and never mutates the source.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct DatasetRepositoryImpl {
    enrollment: Vec<EnrollmentRecord>,
    attendance: Vec<AttendanceRecord>,
    scores: Vec<ScoreRecord>,
}

impl DatasetRepositoryImpl {
    #[doc = r#"
        Loads the three CSV exports named in the dataset configuration.

        A missing file or an invalid row is fatal here, before any report
        generation begins; the pipeline assumes validated records.
    "#]
    pub fn from_csv_files(config: &DatasetConfig) -> anyhow::Result<Self> {
        let enrollment: Vec<EnrollmentRecord> =
            read_csv_from_file::<EnrollmentRecord>(config.enrollment_path())?;
        let attendance: Vec<AttendanceRecord> =
            read_csv_from_file::<AttendanceRecord>(config.attendance_path())?;
        let scores: Vec<ScoreRecord> = read_csv_from_file::<ScoreRecord>(config.scores_path())?;

        info!(
            "Datasets loaded: {} enrollment, {} attendance, {} score records",
            enrollment.len(),
            attendance.len(),
            scores.len()
        );

        Ok(DatasetRepositoryImpl::new(enrollment, attendance, scores))
    }
}

fn year_allowed(years: Option<&BTreeSet<i32>>, year: i32) -> bool {
    years.map_or(true, |set| set.contains(&year))
}

impl DatasetRepository for DatasetRepositoryImpl {
    fn filter_enrollment(
        &self,
        selection: &InstitutionSelection,
        years: Option<&BTreeSet<i32>>,
    ) -> Vec<EnrollmentRecord> {
        self.enrollment
            .iter()
            .filter(|record| selection.matches(&record.rbd))
            .filter(|record| year_allowed(years, record.year))
            .cloned()
            .collect()
    }

    fn filter_attendance(
        &self,
        selection: &InstitutionSelection,
        years: Option<&BTreeSet<i32>>,
    ) -> Vec<AttendanceRecord> {
        self.attendance
            .iter()
            .filter(|record| selection.matches(&record.rbd))
            .filter(|record| year_allowed(years, record.year))
            .cloned()
            .collect()
    }

    fn filter_scores(
        &self,
        selection: &InstitutionSelection,
        years: Option<&BTreeSet<i32>>,
        level: Option<&str>,
    ) -> Vec<ScoreRecord> {
        self.scores
            .iter()
            .filter(|record| selection.matches(&record.rbd))
            .filter(|record| year_allowed(years, record.year))
            .filter(|record| level.map_or(true, |wanted| record.level == wanted))
            .cloned()
            .collect()
    }

    fn institution_codes(&self) -> BTreeSet<String> {
        let mut codes: BTreeSet<String> = BTreeSet::new();
        codes.extend(self.enrollment.iter().map(|record| record.rbd.clone()));
        codes.extend(self.attendance.iter().map(|record| record.rbd.clone()));
        codes.extend(self.scores.iter().map(|record| record.rbd.clone()));
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_repository() -> DatasetRepositoryImpl {
        DatasetRepositoryImpl::new(
            vec![
                EnrollmentRecord::new("10045".to_string(), 2023, 100),
                EnrollmentRecord::new("10045".to_string(), 2024, 150),
                EnrollmentRecord::new("20099".to_string(), 2024, 200),
            ],
            vec![
                AttendanceRecord::new("10045".to_string(), 2024, 0.9),
                AttendanceRecord::new("20099".to_string(), 2024, 0.8),
            ],
            vec![
                ScoreRecord::new("10045".to_string(), 2024, "4B".to_string(), 250.0, 240.0),
                ScoreRecord::new("10045".to_string(), 2024, "2M".to_string(), 260.0, 255.0),
            ],
        )
    }

    #[test]
    fn unknown_institution_yields_empty_not_error() {
        let repository: DatasetRepositoryImpl = sample_repository();
        let selection: InstitutionSelection = InstitutionSelection::parse("99999");

        assert!(repository.filter_enrollment(&selection, None).is_empty());
        assert!(repository.filter_attendance(&selection, None).is_empty());
        assert!(repository.filter_scores(&selection, None, None).is_empty());
    }

    #[test]
    fn empty_year_set_yields_empty() {
        let repository: DatasetRepositoryImpl = sample_repository();
        let selection: InstitutionSelection = InstitutionSelection::Total;
        let no_years: BTreeSet<i32> = BTreeSet::new();

        assert!(repository
            .filter_enrollment(&selection, Some(&no_years))
            .is_empty());
    }

    #[test]
    fn filters_restrict_by_institution_and_year() {
        let repository: DatasetRepositoryImpl = sample_repository();
        let selection: InstitutionSelection = InstitutionSelection::parse("10045");
        let years: BTreeSet<i32> = [2024].into_iter().collect();

        let records: Vec<EnrollmentRecord> =
            repository.filter_enrollment(&selection, Some(&years));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].count, 150);
    }

    #[test]
    fn level_filter_restricts_scores() {
        let repository: DatasetRepositoryImpl = sample_repository();
        let selection: InstitutionSelection = InstitutionSelection::Total;

        let records: Vec<ScoreRecord> = repository.filter_scores(&selection, None, Some("4B"));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, "4B");
    }

    #[test]
    fn institution_codes_span_all_datasets() {
        let repository: DatasetRepositoryImpl = sample_repository();
        let codes: BTreeSet<String> = repository.institution_codes();
        assert_eq!(codes.len(), 2);
        assert!(codes.contains("10045"));
        assert!(codes.contains("20099"));
    }
}
