pub mod aggregation_service_impl;
pub mod chart_service_impl;
pub mod forecast_service_impl;
pub mod loader_service_impl;
pub mod report_service_impl;
