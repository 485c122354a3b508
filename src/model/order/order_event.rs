use crate::common::*;

#[doc = r#"
    날짜 파싱을 통과한 주문 한 건. year/date/week_start 는 order_date 로부터
    미리 유도해 둔다 (week_start 는 월요일 기준 주 시작일).
"#]
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct OrderEvent {
    pub order_date: NaiveDateTime,
    pub product: String,
    pub year: i32,
    pub date: NaiveDate,
    pub week_start: NaiveDate,
}
