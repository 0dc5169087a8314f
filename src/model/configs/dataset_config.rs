use crate::common::*;

#[doc = "Locations of the three normalized CSV exports"]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct DatasetConfig {
    pub enrollment_path: String,
    pub attendance_path: String,
    pub scores_path: String,
}
