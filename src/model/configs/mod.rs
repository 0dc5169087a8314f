pub mod dataset_config;
pub mod report_config;
pub mod selection_config;
pub mod total_config;
