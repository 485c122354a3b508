use crate::common::*;

use crate::model::configs::{report_config::*, server_config::*, total_config::*};

use crate::dto::{
    order_load_result::*, product_forecast::*, report_context::*, weekly_order_pivot::*,
    yearly_order_count::*,
};

use crate::traits::service_traits::{
    aggregation_service::*, chart_service::*, forecast_service::*, loader_service::*,
    report_service::*,
};

const FORECAST_CHART_TITLE: &str = "Forecasted Product Share for Next Week";

#[derive(Debug, new)]
pub struct MainController<
    L: LoaderService,
    A: AggregationService,
    F: ForecastService,
    C: ChartService,
    R: ReportService,
> {
    loader_service: L,
    aggregation_service: A,
    forecast_service: F,
    chart_service: C,
    report_service: R,
}

impl<L, A, F, C, R> MainController<L, A, F, C, R>
where
    L: LoaderService + 'static,
    A: AggregationService + 'static,
    F: ForecastService + 'static,
    C: ChartService + 'static,
    R: ReportService + 'static,
{
    #[doc = r#"
        HTTP 서버를 기동하는 함수. 컨트롤러를 라우터에 바인딩하고 설정된
        주소에서 요청을 받는다.

        # Returns
        * `anyhow::Result<()>` - 바인딩/서빙 실패 시 Err
    "#]
    pub async fn run_server(self) -> anyhow::Result<()> {
        let server_config: &ServerConfig = get_server_config_info();
        let bind_addr: String = format!("{}:{}", server_config.host(), server_config.port());

        let router: Router = build_router(Arc::new(self));

        let listener: tokio::net::TcpListener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| {
                anyhow!(
                    "[MainController->run_server] Failed to bind to {}: {:?}",
                    bind_addr,
                    e
                )
            })?;

        info!("Report server listening on {}", bind_addr);

        axum::serve(listener, router)
            .await
            .map_err(|e| anyhow!("[MainController->run_server] Server error: {:?}", e))?;

        Ok(())
    }

    #[doc = r#"
        `GET /` 핸들러.

        입력 CSV 가 없는 경우는 서버 오류가 아니라 사용자에게 그대로 알려줄
        조건이므로 오류 문자열을 본문으로 돌려준다. 그 외의 실패는 로그를 남기고
        500 으로 응답한다.
    "#]
    pub async fn report_page(&self) -> Response {
        let report_config: &ReportConfig = get_report_config_info();
        let csv_source_path: &str = report_config.csv_source_path();

        if !Path::new(csv_source_path).exists() {
            return format!("Error: CSV file '{}' not found.", csv_source_path).into_response();
        }

        match self.generate_report().await {
            Ok(html_content) => Html(html_content).into_response(),
            Err(e) => {
                error!(
                    "[MainController->report_page] Failed to generate report: {:?}",
                    e
                );
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }

    #[doc = r#"
        리포트 페이지 한 장을 처음부터 끝까지 계산한다. 요청마다 전체를 다시
        계산하며, 차트 이미지 두 장 외에는 아무것도 남기지 않는다.

        1. CSV 적재 및 정제
        2. (연도, 상품) 집계
        3. 최신 연도 파이 차트 렌더링
        4. 주간 피벗 + 상품별 다음 주 예측, 예측 파이 차트 렌더링
        5. 템플릿 컨텍스트 조립 및 HTML 렌더링
    "#]
    async fn generate_report(&self) -> anyhow::Result<String> {
        let report_config: &ReportConfig = get_report_config_info();

        /* 1. CSV 적재 */
        let load_result: OrderLoadResult = self
            .loader_service
            .load_orders(Path::new(report_config.csv_source_path()))
            .await?;

        if *load_result.dropped_rows() > 0 {
            info!(
                "Dropped {} row(s) with unusable order date or product",
                load_result.dropped_rows()
            );
        }

        let orders = load_result.orders();

        /* 2. 연도별 집계 */
        let yearly_orders: Vec<YearlyOrderCount> =
            self.aggregation_service.aggregate_yearly(orders);

        let latest_year: i32 = yearly_orders
            .iter()
            .map(|record| *record.year())
            .max()
            .ok_or_else(|| {
                anyhow!(
                    "[MainController->generate_report] No valid order rows in '{}'",
                    report_config.csv_source_path()
                )
            })?;

        /* 3. 최신 연도 파이 차트 */
        let latest_year_pie: String = self
            .render_latest_year_chart(&yearly_orders, latest_year)
            .await?;

        /* 4. 주간 피벗 + 상품별 예측 */
        let weekly_pivot: WeeklyOrderPivot = self.aggregation_service.pivot_weekly(orders);
        let forecast: Vec<ProductForecast> = self.forecast_service.forecast_next_week(&weekly_pivot);

        let forecast_pie: String = self.render_forecast_chart(&forecast).await?;

        /* 5. 템플릿 렌더링 */
        let context: ReportContext = ReportContext::new(
            yearly_orders,
            latest_year_pie,
            forecast,
            forecast_pie,
            latest_year,
        );

        self.report_service.render_index(&context).await
    }

    #[doc = "최신 연도의 상품 분포 파이 차트를 그리고 정적 URL 을 반환하는 함수"]
    async fn render_latest_year_chart(
        &self,
        yearly_orders: &[YearlyOrderCount],
        latest_year: i32,
    ) -> anyhow::Result<String> {
        let report_config: &ReportConfig = get_report_config_info();

        /* yearly_orders 는 이미 연도 내 건수 내림차순으로 정렬되어 있다 */
        let latest_year_records: Vec<&YearlyOrderCount> = yearly_orders
            .iter()
            .filter(|record| *record.year() == latest_year)
            .collect();

        let labels: Vec<String> = latest_year_records
            .iter()
            .map(|record| record.product().clone())
            .collect();
        let values: Vec<u64> = latest_year_records
            .iter()
            .map(|record| *record.count())
            .collect();

        let output_path: PathBuf =
            Path::new(report_config.static_dir()).join(report_config.latest_year_chart_file());

        self.chart_service
            .generate_pie_chart(
                &format!("Product Distribution in {}", latest_year),
                labels,
                values,
                &output_path,
            )
            .await?;

        Ok(format!(
            "/static/{}",
            report_config.latest_year_chart_file()
        ))
    }

    #[doc = r#"
        다음 주 예측 파이 차트를 그리고 정적 URL 을 반환하는 함수.
        예측에 성공한 상품이 하나도 없거나 예측 합이 0 이면 파이 대신
        플레이스홀더 이미지를 그린다.
    "#]
    async fn render_forecast_chart(&self, forecast: &[ProductForecast]) -> anyhow::Result<String> {
        let report_config: &ReportConfig = get_report_config_info();

        let output_path: PathBuf =
            Path::new(report_config.static_dir()).join(report_config.forecast_chart_file());

        let total_predicted: u64 = forecast
            .iter()
            .map(|record| *record.predicted_next_week())
            .sum();

        if forecast.is_empty() || total_predicted == 0 {
            self.chart_service
                .generate_placeholder_chart(
                    FORECAST_CHART_TITLE,
                    "No forecast data available",
                    &output_path,
                )
                .await?;
        } else {
            let labels: Vec<String> = forecast
                .iter()
                .map(|record| record.product().clone())
                .collect();
            let values: Vec<u64> = forecast
                .iter()
                .map(|record| *record.predicted_next_week())
                .collect();

            self.chart_service
                .generate_pie_chart(FORECAST_CHART_TITLE, labels, values, &output_path)
                .await?;
        }

        Ok(format!("/static/{}", report_config.forecast_chart_file()))
    }

    #[doc = "`GET /static/{file_name}` 핸들러. 생성된 차트 이미지를 서빙한다."]
    pub async fn static_asset(&self, file_name: &str) -> Response {
        /* 단일 경로 세그먼트만 허용한다 */
        if file_name.contains('/') || file_name.contains('\\') || file_name.contains("..") {
            return StatusCode::NOT_FOUND.into_response();
        }

        let asset_path: PathBuf =
            Path::new(get_report_config_info().static_dir()).join(file_name);

        match tokio::fs::read(&asset_path).await {
            Ok(bytes) => ([(header::CONTENT_TYPE, "image/png")], bytes).into_response(),
            Err(_) => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

#[doc = r#"
    라우터를 구성하는 함수. 전역 싱글톤 없이, 명시적으로 만든 컨트롤러 인스턴스를
    각 핸들러 클로저에 바인딩한다.
"#]
pub fn build_router<L, A, F, C, R>(controller: Arc<MainController<L, A, F, C, R>>) -> Router
where
    L: LoaderService + 'static,
    A: AggregationService + 'static,
    F: ForecastService + 'static,
    C: ChartService + 'static,
    R: ReportService + 'static,
{
    let report_controller: Arc<MainController<L, A, F, C, R>> = Arc::clone(&controller);
    let static_controller: Arc<MainController<L, A, F, C, R>> = Arc::clone(&controller);

    Router::new()
        .route(
            "/",
            get(move || {
                let controller = Arc::clone(&report_controller);
                async move { controller.report_page().await }
            }),
        )
        .route(
            "/static/{file_name}",
            get(move |AxumPath(file_name): AxumPath<String>| {
                let controller = Arc::clone(&static_controller);
                async move { controller.static_asset(&file_name).await }
            }),
        )
}
