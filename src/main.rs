/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description :

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod env_configuration;

mod model;
use model::forecast::arima_model::*;

mod dto;

mod traits;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{
    aggregation_service_impl::*, chart_service_impl::*, forecast_service_impl::*,
    loader_service_impl::*, report_service_impl::*,
};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    set_global_logger();

    info!("Order report server start!");

    /* 의존 주입 */
    let loader_service: LoaderServiceImpl = LoaderServiceImpl::new();
    let aggregation_service: AggregationServiceImpl = AggregationServiceImpl::new();
    let forecast_service: ForecastServiceImpl = ForecastServiceImpl::new(ArimaModel::new(1, 1, 1));
    let chart_service: ChartServiceImpl = ChartServiceImpl::new();
    let report_service: ReportServiceImpl = ReportServiceImpl::new();

    let main_controller: MainController<
        LoaderServiceImpl,
        AggregationServiceImpl,
        ForecastServiceImpl,
        ChartServiceImpl,
        ReportServiceImpl,
    > = MainController::new(
        loader_service,
        aggregation_service,
        forecast_service,
        chart_service,
        report_service,
    );

    main_controller.run_server().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
