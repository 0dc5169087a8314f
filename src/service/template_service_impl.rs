use crate::common::*;

use crate::env_configuration::env_config::*;
use crate::model::report::{report_context::*, report_document::*};
use crate::traits::service_traits::template_service::*;

#[derive(Debug, Clone, new)]
pub struct TemplateServiceImpl;

impl TemplateServiceImpl {
    #[doc = "One category block: heading, narrative, table, embedded chart"]
    fn category_block(
        title: &str,
        text: Option<&String>,
        table: Option<&String>,
        chart: Option<&String>,
    ) -> String {
        let mut block: String = String::new();

        if text.is_none() && table.is_none() && chart.is_none() {
            return block;
        }

        block.push_str(&format!("<h2>{}</h2>\n", title));
        if let Some(text) = text {
            if !text.is_empty() {
                block.push_str(&format!("<p>{}</p>\n", text));
            }
        }
        if let Some(table) = table {
            block.push_str(table);
            block.push('\n');
        }
        if let Some(chart) = chart {
            block.push_str(&format!(
                "<img src=\"data:image/png;base64,{}\" alt=\"{}\"/>\n",
                chart, title
            ));
        }

        block
    }

    fn scores_section(context: &ReportContext) -> String {
        let mut section: String = String::new();

        for (level, table) in &context.tables.scores {
            section.push_str(&Self::category_block(
                &format!("Scores - {}", level),
                context.texts.scores.get(level),
                Some(table),
                context.charts.scores.get(level),
            ));
        }

        section
    }

    fn territorial_section(context: &ReportContext) -> String {
        let mut section: String = String::new();
        let territorial = &context.territorial;

        if territorial.enrollment.is_none()
            && territorial.attendance.is_none()
            && territorial.scores.is_empty()
        {
            return section;
        }

        section.push_str("<h2>Territorial Summary</h2>\n");
        if let Some(table) = &territorial.enrollment {
            section.push_str("<h3>Enrollment</h3>\n");
            section.push_str(table);
            section.push('\n');
        }
        if let Some(table) = &territorial.attendance {
            section.push_str("<h3>Attendance</h3>\n");
            section.push_str(table);
            section.push('\n');
        }
        for (level, table) in &territorial.scores {
            section.push_str(&format!("<h3>Scores - {}</h3>\n", level));
            section.push_str(table);
            section.push('\n');
        }

        section
    }

    #[doc = r#"
        Substitutes the context into the template text.

        Placeholder substitution is plain `{token}` replacement; an absent
        category leaves its section placeholder empty rather than emitting an
        empty shell.
    "#]
    pub fn bind(&self, template: &str, context: &ReportContext) -> String {
        template
            .replace("{institution_label}", &context.institution_label)
            .replace("{generated_at}", &context.generated_at)
            .replace(
                "{enrollment_section}",
                &Self::category_block(
                    "Enrollment",
                    context.texts.enrollment.as_ref(),
                    context.tables.enrollment.as_ref(),
                    context.charts.enrollment.as_ref(),
                ),
            )
            .replace(
                "{attendance_section}",
                &Self::category_block(
                    "Attendance",
                    context.texts.attendance.as_ref(),
                    context.tables.attendance.as_ref(),
                    context.charts.attendance.as_ref(),
                ),
            )
            .replace("{scores_section}", &Self::scores_section(context))
            .replace("{territorial_section}", &Self::territorial_section(context))
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render_document(&self, context: &ReportContext) -> anyhow::Result<ReportDocument> {
        let template: String = fs::read_to_string(&*HTML_TEMPLATE_PATH).map_err(|e| {
            anyhow!(
                "[TemplateServiceImpl->render_document] Failed to read template '{}': {:?}",
                &*HTML_TEMPLATE_PATH,
                e
            )
        })?;

        let html: String = self.bind(&template, context);

        Ok(ReportDocument::from_html(&context.institution_label, html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::report::territorial_summary::*;

    const TEMPLATE: &str = "<html><h1>{institution_label} - {generated_at}</h1>\
        {enrollment_section}{attendance_section}{scores_section}{territorial_section}</html>";

    fn sample_context() -> ReportContext {
        let mut context: ReportContext = ReportContext::empty(
            "10045".to_string(),
            TerritorialSummary::default(),
            "30/08/2026".to_string(),
        );
        context.texts.enrollment = Some("Enrollment increased 50.0% relative to 2023".to_string());
        context.tables.enrollment = Some("<table></table>".to_string());
        context.charts.enrollment = Some("aGVsbG8=".to_string());
        context
    }

    #[test]
    fn placeholders_are_substituted() {
        let html: String = TemplateServiceImpl::new().bind(TEMPLATE, &sample_context());

        assert!(html.contains("<h1>10045 - 30/08/2026</h1>"));
        assert!(html.contains("Enrollment increased 50.0%"));
        assert!(html.contains("data:image/png;base64,aGVsbG8="));
        assert!(!html.contains("{enrollment_section}"));
    }

    #[test]
    fn absent_categories_leave_no_section_shell() {
        let context: ReportContext = ReportContext::empty(
            "10045".to_string(),
            TerritorialSummary::default(),
            "30/08/2026".to_string(),
        );
        let html: String = TemplateServiceImpl::new().bind(TEMPLATE, &context);

        assert!(!html.contains("<h2>Attendance</h2>"));
        assert!(!html.contains("<h2>Territorial Summary</h2>"));
        assert!(!html.contains('{'));
    }

    #[test]
    fn document_name_and_mime_are_deterministic() {
        let document: ReportDocument =
            ReportDocument::from_html("TOTAL", "<html></html>".to_string());
        assert_eq!(document.file_name(), "report_TOTAL.html");
        assert_eq!(document.mime_type(), REPORT_MIME_TYPE);
    }
}
