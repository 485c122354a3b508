pub mod arima_model;
