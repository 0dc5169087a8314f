use crate::common::*;

use crate::model::report::territorial_summary::*;

#[doc = r#"
    Per-category payload slot of a report context.

    A category the user did not select, or one whose filter matched no rows,
    is simply absent (`None` / missing level key) rather than present with
    empty contents.
"#]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub scores: BTreeMap<String, String>,
}

#[doc = r#"
    Complete structured payload for one institution's report, consumed once
    by the template renderer and then discarded.

    `texts` holds the trend narratives, `tables` the pre-serialized HTML
    tables, `charts` the base64-encoded PNG images. Scores are further keyed
    by test level in every map.
"#]
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub institution_label: String,
    pub texts: CategoryPayload,
    pub tables: CategoryPayload,
    pub charts: CategoryPayload,
    pub territorial: TerritorialSummary,
    pub generated_at: String,
}

impl ReportContext {
    #[doc = "Empty context shell; the assembler fills in whichever categories produce output"]
    pub fn empty(
        institution_label: String,
        territorial: TerritorialSummary,
        generated_at: String,
    ) -> Self {
        ReportContext {
            institution_label,
            texts: CategoryPayload::default(),
            tables: CategoryPayload::default(),
            charts: CategoryPayload::default(),
            territorial,
            generated_at,
        }
    }
}
