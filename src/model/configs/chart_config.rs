use crate::common::*;

#[doc = "파이 차트 이미지 설정 정보"]
#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ChartConfig {
    pub image_width: u32,
    pub image_height: u32,
    pub start_angle: f64,
}
