use crate::common::*;

#[doc = r#"
    CSV 원본 한 행. 관심 컬럼 두 개만 역직렬화하며 나머지 컬럼은 무시된다.
    두 컬럼 모두 결측일 수 있으므로 Option 으로 받는다.
"#]
#[derive(Debug, Clone, Deserialize)]
pub struct RawOrderRecord {
    #[serde(rename = "Order Date")]
    pub order_date: Option<String>,
    #[serde(rename = "Product")]
    pub product: Option<String>,
}
