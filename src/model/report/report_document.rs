use crate::common::*;

#[doc = "Fixed MIME type every report document is offered under"]
pub const REPORT_MIME_TYPE: &str = "text/html";

#[doc = "One rendered report, named deterministically from the institution label"]
#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct ReportDocument {
    pub file_name: String,
    pub mime_type: String,
    pub html: String,
}

impl ReportDocument {
    pub fn from_html(institution_label: &str, html: String) -> Self {
        ReportDocument::new(
            format!("report_{}.html", institution_label),
            REPORT_MIME_TYPE.to_string(),
            html,
        )
    }
}
