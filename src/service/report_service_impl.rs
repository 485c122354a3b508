use crate::common::*;

use crate::dto::{product_forecast::*, report_context::*, yearly_order_count::*};
use crate::env_configuration::env_config::*;
use crate::traits::service_traits::report_service::*;

#[derive(Debug, Clone, new)]
pub struct ReportServiceImpl;

impl ReportServiceImpl {
    #[doc = "템플릿 플레이스홀더를 컨텍스트 값으로 치환하는 함수"]
    fn render_template(&self, template_content: &str, context: &ReportContext) -> String {
        template_content
            .replace("{{LATEST_YEAR}}", &context.latest_year().to_string())
            .replace(
                "{{YEARLY_ORDER_ROWS}}",
                &self.generate_yearly_order_rows(context.yearly_orders()),
            )
            .replace("{{LATEST_YEAR_PIE}}", context.latest_year_pie())
            .replace(
                "{{FORECAST_ROWS}}",
                &self.generate_forecast_rows(context.forecast()),
            )
            .replace("{{FORECAST_PIE}}", context.forecast_pie())
    }

    #[doc = "연도별 집계 테이블 행 생성"]
    fn generate_yearly_order_rows(&self, yearly_orders: &[YearlyOrderCount]) -> String {
        self.generate_table_rows(yearly_orders, |record| {
            format!(
                r#"<tr>
                    <td style="border: 1px solid #ddd; padding: 12px; text-align: left; background-color: #fff;">{}</td>
                    <td style="border: 1px solid #ddd; padding: 12px; text-align: left; background-color: #fff;">{}</td>
                    <td style="border: 1px solid #ddd; padding: 12px; text-align: left; background-color: #fff;">{}</td>
                </tr>"#,
                record.year(),
                record.product(),
                record.count().to_formatted_string(&Locale::en),
            )
        })
    }

    #[doc = "예측 테이블 행 생성. 예측에 성공한 상품이 없으면 안내 행을 넣는다."]
    fn generate_forecast_rows(&self, forecast: &[ProductForecast]) -> String {
        if forecast.is_empty() {
            return r#"<tr>
                    <td colspan="2" style="border: 1px solid #ddd; padding: 12px; text-align: left; background-color: #fff;">No forecast available</td>
                </tr>"#
                .to_string();
        }

        self.generate_table_rows(forecast, |record| {
            format!(
                r#"<tr>
                    <td style="border: 1px solid #ddd; padding: 12px; text-align: left; background-color: #fff;">{}</td>
                    <td style="border: 1px solid #ddd; padding: 12px; text-align: left; background-color: #fff;">{}</td>
                </tr>"#,
                record.product(),
                record.predicted_next_week().to_formatted_string(&Locale::en),
            )
        })
    }

    #[doc = "Helper function for creating common table rows"]
    fn generate_table_rows<T, F>(&self, data: &[T], row_formatter: F) -> String
    where
        F: Fn(&T) -> String,
    {
        data.iter().map(row_formatter).collect::<String>()
    }
}

#[async_trait]
impl ReportService for ReportServiceImpl {
    async fn render_index(&self, context: &ReportContext) -> anyhow::Result<String> {
        /* HTML 템플릿 파일 읽기 */
        let template_content: String = tokio::fs::read_to_string(&*REPORT_TEMPLATE_PATH)
            .await
            .map_err(|e| {
                anyhow!(
                    "[ReportServiceImpl->render_index] Failed to read template '{}': {:?}",
                    &*REPORT_TEMPLATE_PATH,
                    e
                )
            })?;

        Ok(self.render_template(&template_content, context))
    }
}
