use crate::common::*;

use crate::enums::category::*;

#[doc = r#"
    Fully-resolved selection snapshot for one generation run.

    The selection interface (whatever form it takes) writes this file once
    per explicit generate action; the pipeline only ever pulls from it, there
    is no reactive recomputation. Years are listed per category because each
    dataset covers a different span.
"#]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct SelectionConfig {
    pub institutions: Vec<String>,
    pub categories: Vec<Category>,
    #[serde(default)]
    pub enrollment_years: Vec<i32>,
    #[serde(default)]
    pub attendance_years: Vec<i32>,
    #[serde(default)]
    pub scores_years: Vec<i32>,
}

impl SelectionConfig {
    pub fn includes(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    pub fn enrollment_year_set(&self) -> BTreeSet<i32> {
        self.enrollment_years.iter().copied().collect()
    }

    pub fn attendance_year_set(&self) -> BTreeSet<i32> {
        self.attendance_years.iter().copied().collect()
    }

    pub fn scores_year_set(&self) -> BTreeSet<i32> {
        self.scores_years.iter().copied().collect()
    }
}
