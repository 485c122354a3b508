use crate::common::*;

#[doc = "예측에 성공한 상품 하나의 다음 주 예측 수요"]
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct ProductForecast {
    pub product: String,
    pub predicted_next_week: u64,
}
