use crate::common::*;

use crate::dto::{year_pair_row::*, year_value_row::*};
use crate::enums::institution_selection::*;
use crate::model::report::territorial_summary::*;
use crate::traits::service_traits::{aggregation_service::*, summary_service::*};
use crate::utils_modules::format_utils::*;

#[derive(Debug, new)]
pub struct SummaryServiceImpl<A: AggregationService> {
    aggregation_service: Arc<A>,
}

impl<A: AggregationService> SummaryServiceImpl<A> {
    #[doc = "Two most recent rows of an ascending series, newest first"]
    fn most_recent_desc(rows: &[YearValueRow]) -> Vec<YearValueRow> {
        rows.iter().rev().take(2).cloned().collect()
    }

    fn most_recent_pairs_desc(rows: &[YearPairRow]) -> Vec<YearPairRow> {
        rows.iter().rev().take(2).cloned().collect()
    }
}

impl<A: AggregationService> SummaryService for SummaryServiceImpl<A> {
    fn territorial_summary(&self) -> TerritorialSummary {
        let mut summary: TerritorialSummary = TerritorialSummary::default();

        /* Always the [TOTAL] rule over every year on record; the user
        selection plays no part here. */
        let enrollment: Vec<YearValueRow> = self
            .aggregation_service
            .enrollment_series(&InstitutionSelection::Total, None);
        if !enrollment.is_empty() {
            let rows: Vec<Vec<String>> = Self::most_recent_desc(&enrollment)
                .iter()
                .map(|row| vec![row.year.to_string(), format_whole(row.value)])
                .collect();
            summary.enrollment = Some(render_html_table(&["Year", "Enrollment"], &rows));
        }

        let attendance: Vec<YearValueRow> = self
            .aggregation_service
            .attendance_series(&InstitutionSelection::Total, None);
        if !attendance.is_empty() {
            let rows: Vec<Vec<String>> = Self::most_recent_desc(&attendance)
                .iter()
                .map(|row| vec![row.year.to_string(), format_one_decimal(row.value)])
                .collect();
            summary.attendance = Some(render_html_table(&["Year", "Attendance"], &rows));
        }

        let scores: BTreeMap<String, Vec<YearPairRow>> = self
            .aggregation_service
            .score_series(&InstitutionSelection::Total, None);
        for (level, series) in scores {
            let rows: Vec<Vec<String>> = Self::most_recent_pairs_desc(&series)
                .iter()
                .map(|row| {
                    vec![
                        row.year.to_string(),
                        level.clone(),
                        format_whole(row.reading),
                        format_whole(row.math),
                    ]
                })
                .collect();
            summary.scores.insert(
                level,
                render_html_table(&["Year", "Level", "Reading", "Math"], &rows),
            );
        }

        summary
    }
}
