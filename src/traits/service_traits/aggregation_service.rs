use crate::common::*;

use crate::dto::{weekly_order_pivot::*, yearly_order_count::*};
use crate::model::order::order_event::*;

pub trait AggregationService: Send + Sync {
    #[doc = "
        (연도, 상품)별 주문 건수 집계. 연도 내림차순, 건수 내림차순으로 정렬하며
        동률은 CSV 등장 순서를 유지한다.
    "]
    fn aggregate_yearly(&self, orders: &[OrderEvent]) -> Vec<YearlyOrderCount>;

    #[doc = "주 시작일 × 상품 피벗 테이블 생성. 주문이 없던 조합은 0 으로 채운다."]
    fn pivot_weekly(&self, orders: &[OrderEvent]) -> WeeklyOrderPivot;
}
