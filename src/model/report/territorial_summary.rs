use crate::common::*;

#[doc = r#"
    System-wide rollup of the two most recent years per category, independent
    of the user selection.

    Computed once per generation run and cloned into every institution's
    context. Score tables are keyed by test level. A category with no source
    data at all stays `None` and is skipped by the template.
"#]
#[derive(Debug, Clone, Default, Serialize)]
pub struct TerritorialSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub scores: BTreeMap<String, String>,
}
