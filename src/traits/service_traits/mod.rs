pub mod aggregation_service;
pub mod chart_service;
pub mod narrative_service;
pub mod report_service;
pub mod summary_service;
pub mod template_service;
