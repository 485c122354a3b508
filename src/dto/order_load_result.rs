use crate::common::*;

use crate::model::order::order_event::*;

#[doc = "CSV 적재 결과. 날짜/상품이 결측이어서 버린 행 수를 함께 보고한다."]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct OrderLoadResult {
    pub orders: Vec<OrderEvent>,
    pub dropped_rows: usize,
}
