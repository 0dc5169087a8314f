use crate::common::*;

use crate::dto::year_value_row::*;
use crate::traits::service_traits::narrative_service::*;
use crate::utils_modules::format_utils::*;

#[doc = "Separator between trend clauses and between the reading/math narratives"]
pub const CLAUSE_SEPARATOR: &str = " · ";

#[derive(Debug, Clone, new)]
pub struct NarrativeServiceImpl;

impl NarrativeService for NarrativeServiceImpl {
    fn trend_narrative(&self, rows: &[YearValueRow], metric: &str) -> String {
        let mut sorted: Vec<YearValueRow> = rows.to_vec();
        sorted.sort_by(|a, b| b.year.cmp(&a.year));

        if sorted.len() < 2 {
            return String::new();
        }

        let current: &YearValueRow = &sorted[0];
        let mut clauses: Vec<String> = Vec::new();

        for prior in &sorted[1..] {
            /* Zero prior value is defined as 0% change, never a division. */
            let pct: f64 = if prior.value == 0.0 {
                0.0
            } else {
                round1((current.value - prior.value) / prior.value * 100.0)
            };

            /* Direction follows the value comparison, not the rounded
            percentage; a rise from zero reads "increased 0.0%". */
            let direction: &str = if current.value > prior.value {
                "increased"
            } else if current.value < prior.value {
                "decreased"
            } else {
                "stayed the same"
            };

            clauses.push(format!(
                "{} {} {:.1}% relative to {}",
                metric,
                direction,
                pct.abs(),
                prior.year
            ));
        }

        clauses.join(CLAUSE_SEPARATOR)
    }
}
