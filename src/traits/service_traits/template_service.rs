use crate::model::report::{report_context::*, report_document::*};

#[doc = r#"
    Binds a report context to the HTML template and returns the final
    document. A missing or unreadable template is a collaborator failure and
    aborts the whole run, unlike per-institution errors.
"#]
pub trait TemplateService: Send + Sync {
    fn render_document(&self, context: &ReportContext) -> anyhow::Result<ReportDocument>;
}
