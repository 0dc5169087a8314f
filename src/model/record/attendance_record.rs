use crate::common::*;

#[doc = r#"
    One attendance figure, unique per (institution code, year).

    `rate` is a fraction in [0, 1]; it is scaled to a 0-100 percentage at
    aggregation time, never here.
"#]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct AttendanceRecord {
    #[serde(rename = "RBD")]
    pub rbd: String,
    #[serde(rename = "AGNO")]
    pub year: i32,
    #[serde(rename = "Asistencia")]
    pub rate: f64,
}
