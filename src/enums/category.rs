use crate::common::*;

#[doc = "Report category; each one is independently toggleable in the selection snapshot"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Enrollment,
    Attendance,
    Scores,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Enrollment => "enrollment",
            Category::Attendance => "attendance",
            Category::Scores => "scores",
        }
    }
}
