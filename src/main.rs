mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::dataset_repository_impl::*;

mod env_configuration;

mod traits;

mod enums;

mod dto;

mod model;
use model::configs::total_config::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{
    aggregation_service_impl::*, chart_service_impl::*, narrative_service_impl::*,
    report_service_impl::*, summary_service_impl::*, template_service_impl::*,
};

mod controller;
use controller::main_controller::*;

fn main() {
    /* Global logger and environment setup */
    dotenv().ok();
    set_global_logger();

    info!("Report generator start!");

    /* Datasets are loaded fully before any report is generated; a broken
    source file is fatal here. */
    let repository: Arc<DatasetRepositoryImpl> = Arc::new(
        DatasetRepositoryImpl::from_csv_files(get_dataset_config_info()).unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while loading the datasets.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        }),
    );

    /* Dependency injection */
    let aggregation_service: Arc<AggregationServiceImpl<DatasetRepositoryImpl>> =
        Arc::new(AggregationServiceImpl::new(repository));

    let summary_service: SummaryServiceImpl<AggregationServiceImpl<DatasetRepositoryImpl>> =
        SummaryServiceImpl::new(Arc::clone(&aggregation_service));

    let report_service: ReportServiceImpl<
        AggregationServiceImpl<DatasetRepositoryImpl>,
        NarrativeServiceImpl,
        ChartServiceImpl,
    > = ReportServiceImpl::new(
        aggregation_service,
        NarrativeServiceImpl::new(),
        ChartServiceImpl::new(),
    );

    let main_controller = MainController::new(
        report_service,
        summary_service,
        TemplateServiceImpl::new(),
    );

    main_controller.generate_reports().unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
