pub mod order_load_result;
pub mod product_forecast;
pub mod report_context;
pub mod weekly_order_pivot;
pub mod yearly_order_count;
