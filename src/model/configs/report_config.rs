use crate::common::*;

#[doc = "리포트 입력/출력 경로 설정 정보"]
#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ReportConfig {
    pub csv_source_path: String,
    pub static_dir: String,
    pub latest_year_chart_file: String,
    pub forecast_chart_file: String,
}
