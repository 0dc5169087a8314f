use crate::common::*;

#[doc = "Report output settings"]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ReportConfig {
    pub output_dir: String,
}
