use crate::common::*;

#[doc = "Selection sentinel meaning every institution combined"]
pub const AGGREGATE_SENTINEL: &str = "[TOTAL]";

#[doc = r#"
    One entry of the institution selection.

    `Total` is not a stored institution; it switches the aggregation rule to
    reduce across every institution code sharing a year (sum for enrollment
    counts, mean for attendance rates and scores).
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstitutionSelection {
    Total,
    Code(String),
}

impl InstitutionSelection {
    pub fn parse(raw: &str) -> Self {
        if raw == AGGREGATE_SENTINEL {
            InstitutionSelection::Total
        } else {
            InstitutionSelection::Code(raw.to_string())
        }
    }

    #[doc = "Label used in the report header and the output file name"]
    pub fn label(&self) -> String {
        match self {
            InstitutionSelection::Total => "TOTAL".to_string(),
            InstitutionSelection::Code(code) => code.clone(),
        }
    }

    pub fn is_total(&self) -> bool {
        matches!(self, InstitutionSelection::Total)
    }

    #[doc = "Whether a record with the given institution code falls under this selection"]
    pub fn matches(&self, rbd: &str) -> bool {
        match self {
            InstitutionSelection::Total => true,
            InstitutionSelection::Code(code) => code == rbd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_parses_to_total() {
        assert_eq!(
            InstitutionSelection::parse("[TOTAL]"),
            InstitutionSelection::Total
        );
        assert_eq!(
            InstitutionSelection::parse("10045"),
            InstitutionSelection::Code("10045".to_string())
        );
    }

    #[test]
    fn total_matches_every_code() {
        let total: InstitutionSelection = InstitutionSelection::Total;
        assert!(total.matches("10045"));
        assert!(total.matches("99999"));
        assert_eq!(total.label(), "TOTAL");
    }

    #[test]
    fn code_matches_only_itself() {
        let single: InstitutionSelection = InstitutionSelection::parse("10045");
        assert!(single.matches("10045"));
        assert!(!single.matches("10046"));
        assert_eq!(single.label(), "10045");
    }
}
