use crate::common::*;

use crate::model::configs::{dataset_config::*, report_config::*};

use crate::env_configuration::env_config::*;

use crate::utils_modules::io_utils::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_server_config);

#[doc = "Function to initialize the server configuration instance"]
pub fn initialize_server_config() -> TotalConfig {
    info!("initialize_server_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub datasets: DatasetConfig,
    pub report: ReportConfig,
}

#[doc = "Dataset CSV locations"]
pub fn get_dataset_config_info() -> &'static DatasetConfig {
    &TOTAL_CONFIG.datasets
}

#[doc = "Report output settings"]
pub fn get_report_config_info() -> &'static ReportConfig {
    &TOTAL_CONFIG.report
}

impl TotalConfig {
    fn new() -> Self {
        match read_toml_from_file::<TotalConfig>(&SERVER_CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                let err_msg =
                    "Failed to convert the data from SERVER_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }
}
