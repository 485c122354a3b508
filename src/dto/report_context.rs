use crate::common::*;

use crate::dto::{product_forecast::*, yearly_order_count::*};

#[doc = r#"
    템플릿 렌더러에 넘겨지는 리포트 페이지 데이터 일체.
    yearly_orders / forecast 는 이미 출력 순서대로 정렬되어 있다.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ReportContext {
    pub yearly_orders: Vec<YearlyOrderCount>,
    pub latest_year_pie: String,
    pub forecast: Vec<ProductForecast>,
    pub forecast_pie: String,
    pub latest_year: i32,
}
