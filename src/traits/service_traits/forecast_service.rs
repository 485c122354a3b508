use crate::common::*;

use crate::dto::{product_forecast::*, weekly_order_pivot::*};

pub trait ForecastService: Send + Sync {
    #[doc = "
        Fit an independent model per product column and forecast one week ahead.
        Products whose fit fails are logged and excluded; the survivors come
        back sorted by predicted count, descending.
    "]
    fn forecast_next_week(&self, pivot: &WeeklyOrderPivot) -> Vec<ProductForecast>;
}
