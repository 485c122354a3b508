use crate::common::*;

use crate::dto::report_context::*;

#[async_trait]
pub trait ReportService: Send + Sync {
    #[doc = "리포트 페이지 HTML 을 템플릿으로부터 렌더링하는 함수"]
    async fn render_index(&self, context: &ReportContext) -> anyhow::Result<String>;
}
