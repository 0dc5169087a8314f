use crate::common::*;

#[doc = r#"
    One standardized-test result, unique per (institution code, year, level).

    `NIVEL` is the grade/level the test was applied to; reading and math are
    reported as separate point scores for the same sitting.
"#]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct ScoreRecord {
    #[serde(rename = "RBD")]
    pub rbd: String,
    #[serde(rename = "ANIO")]
    pub year: i32,
    #[serde(rename = "NIVEL")]
    pub level: String,
    #[serde(rename = "Lectura")]
    pub reading: f64,
    #[serde(rename = "Matemática")]
    pub math: f64,
}
