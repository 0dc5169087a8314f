use crate::common::*;

use crate::dto::{year_pair_row::*, year_value_row::*};
use crate::enums::institution_selection::*;
use crate::traits::repository_traits::dataset_repository::*;
use crate::traits::service_traits::aggregation_service::*;
use crate::utils_modules::format_utils::*;

#[derive(Debug, new)]
pub struct AggregationServiceImpl<R: DatasetRepository> {
    repository: Arc<R>,
}

impl<R: DatasetRepository> AggregationService for AggregationServiceImpl<R> {
    fn enrollment_series(
        &self,
        selection: &InstitutionSelection,
        years: Option<&BTreeSet<i32>>,
    ) -> Vec<YearValueRow> {
        let records = self.repository.filter_enrollment(selection, years);

        /* Sum per year; a single-institution selection has one row per year,
        so the reduction degenerates to a passthrough. */
        let mut by_year: BTreeMap<i32, f64> = BTreeMap::new();
        for record in &records {
            *by_year.entry(record.year).or_insert(0.0) += record.count as f64;
        }

        by_year
            .into_iter()
            .map(|(year, value)| YearValueRow::new(year, value))
            .collect()
    }

    fn attendance_series(
        &self,
        selection: &InstitutionSelection,
        years: Option<&BTreeSet<i32>>,
    ) -> Vec<YearValueRow> {
        let records = self.repository.filter_attendance(selection, years);

        let mut by_year: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
        for record in &records {
            let entry: &mut (f64, usize) = by_year.entry(record.year).or_insert((0.0, 0));
            entry.0 += record.rate;
            entry.1 += 1;
        }

        /* Rates surface as 0-100 percentages with one decimal everywhere. */
        by_year
            .into_iter()
            .map(|(year, (sum, n))| YearValueRow::new(year, round1(sum / n as f64 * 100.0)))
            .collect()
    }

    fn score_series(
        &self,
        selection: &InstitutionSelection,
        years: Option<&BTreeSet<i32>>,
    ) -> BTreeMap<String, Vec<YearPairRow>> {
        let levels: BTreeSet<String> = self
            .repository
            .filter_scores(selection, years, None)
            .iter()
            .map(|record| record.level.clone())
            .collect();

        let mut series: BTreeMap<String, Vec<YearPairRow>> = BTreeMap::new();

        for level in levels {
            let records = self.repository.filter_scores(selection, years, Some(&level));

            let mut by_year: BTreeMap<i32, (f64, f64, usize)> = BTreeMap::new();
            for record in &records {
                let entry: &mut (f64, f64, usize) =
                    by_year.entry(record.year).or_insert((0.0, 0.0, 0));
                entry.0 += record.reading;
                entry.1 += record.math;
                entry.2 += 1;
            }

            let rows: Vec<YearPairRow> = by_year
                .into_iter()
                .map(|(year, (reading, math, n))| {
                    YearPairRow::new(
                        year,
                        round0(reading / n as f64),
                        round0(math / n as f64),
                    )
                })
                .collect();

            series.insert(level, rows);
        }

        series
    }
}
