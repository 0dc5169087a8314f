pub mod report_context;
pub mod report_document;
pub mod territorial_summary;
