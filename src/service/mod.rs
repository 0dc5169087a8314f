pub mod aggregation_service_impl;
pub mod chart_service_impl;
pub mod narrative_service_impl;
pub mod report_service_impl;
pub mod summary_service_impl;
pub mod template_service_impl;
