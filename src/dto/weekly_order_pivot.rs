use crate::common::*;

#[doc = r#"
    주(week) × 상품(product) 피벗 테이블.

    weeks 는 데이터에서 관측된 주 시작일(월요일)의 오름차순 목록이고,
    각 상품 시리즈의 counts 는 weeks 와 같은 길이로 정렬되어 있으며
    주문이 없던 주는 0 으로 채워진다.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct WeeklyOrderPivot {
    pub weeks: Vec<NaiveDate>,
    pub series: Vec<ProductWeeklySeries>,
}

#[doc = "피벗의 한 상품 컬럼"]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ProductWeeklySeries {
    pub product: String,
    pub counts: Vec<f64>,
}
