use crate::common::*;

#[doc = "단일 (연도, 상품) 그룹의 주문 건수 집계 레코드"]
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct YearlyOrderCount {
    pub year: i32,
    pub product: String,
    pub count: u64,
}
