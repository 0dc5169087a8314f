use crate::enums::institution_selection::*;
use crate::model::configs::selection_config::*;
use crate::model::report::{report_context::*, territorial_summary::*};

#[doc = r#"
    Assembles one institution's report context: per selected category it
    filters, aggregates, narrates, charts, and serializes a display table,
    then packages everything with the shared territorial summary and the
    generation date.
"#]
pub trait ReportService: Send + Sync {
    fn build_report_context(
        &self,
        selection: &InstitutionSelection,
        selection_config: &SelectionConfig,
        territorial: &TerritorialSummary,
    ) -> anyhow::Result<ReportContext>;
}
