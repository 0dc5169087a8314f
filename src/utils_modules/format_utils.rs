use crate::common::*;

#[doc = "Rounds to one decimal place, away from zero on ties"]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[doc = "Rounds to the nearest whole number"]
pub fn round0(value: f64) -> f64 {
    value.round()
}

#[doc = "Percentage label with exactly one decimal, e.g. `93.5%`"]
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[doc = "One-decimal cell value for attendance tables, e.g. `93.5`"]
pub fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", value)
}

#[doc = "Whole-number cell value for enrollment and score tables"]
pub fn format_whole(value: f64) -> String {
    format!("{:.0}", value)
}

#[doc = "Thousands-grouped whole number for chart point labels, e.g. `12,340`"]
pub fn format_count(value: f64) -> String {
    (value.round() as i64).to_formatted_string(&Locale::en)
}

#[doc = r#"
    Serializes ordered rows and column labels into an HTML table.

    Single serialization point for every table in the report context,
    per-category and territorial alike; nothing else builds table markup.

    # Arguments
    * `headers` - column labels, in display order
    * `rows` - row cells, already formatted; each row must match `headers`

    # Returns
    * `String` - `<table>` markup
"#]
pub fn render_html_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut table: String = String::from("<table border=\"1\" class=\"dataframe\">\n<thead>\n<tr>");

    for header in headers {
        table.push_str(&format!("<th>{}</th>", header));
    }

    table.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in rows {
        table.push_str("<tr>");
        for cell in row {
            table.push_str(&format!("<td>{}</td>", cell));
        }
        table.push_str("</tr>\n");
    }

    table.push_str("</tbody>\n</table>");
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round1_keeps_one_decimal() {
        assert_eq!(round1(11.111), 11.1);
        assert_eq!(round1(-11.15), -11.2);
        assert_eq!(round1(50.0), 50.0);
    }

    #[test]
    fn count_labels_group_thousands() {
        assert_eq!(format_count(1234567.0), "1,234,567");
        assert_eq!(format_count(950.4), "950");
    }

    #[test]
    fn percent_labels_keep_one_decimal() {
        assert_eq!(format_percent(80.0), "80.0%");
        assert_eq!(format_percent(93.55), "93.5%");
    }

    #[test]
    fn table_markup_contains_headers_and_cells() {
        let rows: Vec<Vec<String>> = vec![
            vec!["2024".to_string(), "150".to_string()],
            vec!["2023".to_string(), "100".to_string()],
        ];
        let table: String = render_html_table(&["Year", "Enrollment"], &rows);

        assert!(table.starts_with("<table"));
        assert!(table.contains("<th>Year</th><th>Enrollment</th>"));
        assert!(table.contains("<td>2024</td><td>150</td>"));
        assert!(table.ends_with("</table>"));
    }
}
