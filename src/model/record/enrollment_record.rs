use crate::common::*;

#[doc = r#"
    One enrollment figure, unique per (institution code, year).

    Column names follow the source export: `RBD` is the institution code,
    `AGNO` the year, `Matricula` the enrolled head count.
"#]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct EnrollmentRecord {
    #[serde(rename = "RBD")]
    pub rbd: String,
    #[serde(rename = "AGNO")]
    pub year: i32,
    #[serde(rename = "Matricula")]
    pub count: u32,
}
