use crate::common::*;

#[doc = "Generation date shown in the report header, local time"]
pub fn get_current_date_str() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}

#[doc = "Current local timestamp for log and document metadata"]
pub fn get_current_datetime_str() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}
