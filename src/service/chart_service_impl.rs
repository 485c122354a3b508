use crate::common::*;
use crate::model::configs::total_config::*;
use crate::traits::service_traits::chart_service::*;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

/* 슬라이스 색상 팔레트. 상품 수가 넘치면 순환한다. */
const PIE_PALETTE: [RGBColor; 10] = [
    RGBColor(66, 133, 244),
    RGBColor(219, 68, 55),
    RGBColor(244, 180, 0),
    RGBColor(15, 157, 88),
    RGBColor(171, 71, 188),
    RGBColor(255, 112, 67),
    RGBColor(3, 169, 244),
    RGBColor(139, 195, 74),
    RGBColor(121, 85, 72),
    RGBColor(96, 125, 139),
];

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl;

impl ChartServiceImpl {
    #[doc = "출력 디렉토리를 준비하고 이전 요청이 만든 이미지를 제거하는 함수"]
    async fn prepare_output_path(&self, output_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    anyhow!(
                        "[ChartServiceImpl->prepare_output_path] Failed to create '{}': {:?}",
                        parent.display(),
                        e
                    )
                })?;
            }
        }

        /* 이미지는 요청마다 덮어쓴다. 남아있던 파일은 먼저 지운다. */
        if tokio::fs::try_exists(output_path).await.unwrap_or(false) {
            tokio::fs::remove_file(output_path).await.map_err(|e| {
                anyhow!(
                    "[ChartServiceImpl->prepare_output_path] Failed to remove '{}': {:?}",
                    output_path.display(),
                    e
                )
            })?;
        }

        Ok(())
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn generate_pie_chart(
        &self,
        title: &str,
        labels: Vec<String>,
        values: Vec<u64>,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        if labels.len() != values.len() {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_pie_chart] Labels and values must have the same length: {} vs {}",
                labels.len(),
                values.len()
            ));
        }

        if labels.is_empty() {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_pie_chart] Cannot generate chart with empty data"
            ));
        }

        let slice_total: u64 = values.iter().sum();
        if slice_total == 0 {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_pie_chart] Slice total is zero, nothing to draw"
            ));
        }

        self.prepare_output_path(output_path).await?;

        let chart_config = get_chart_config_info();
        let image_width: u32 = *chart_config.image_width();
        let image_height: u32 = *chart_config.image_height();
        let start_angle: f64 = *chart_config.start_angle();

        let output_path_str: String = output_path.to_string_lossy().to_string();
        let title: String = title.to_string();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                /* ---- 여기부터는 동기 코드 (plotters) ---- */
                let root =
                    BitMapBackend::new(&output_path_str, (image_width, image_height))
                        .into_drawing_area();
                root.fill(&WHITE)?;

                let title_style = TextStyle::from(("sans-serif", 32).into_font())
                    .color(&RGBColor(40, 40, 40));
                let chart_area = root.titled(&title, title_style)?;

                let dims = chart_area.dim_in_pixel();
                let center: (i32, i32) = ((dims.0 / 2) as i32, (dims.1 / 2) as i32);
                let radius: f64 = dims.0.min(dims.1) as f64 * 0.35;

                let sizes: Vec<f64> = values.iter().map(|v| *v as f64).collect();
                let colors: Vec<RGBColor> = (0..sizes.len())
                    .map(|i| PIE_PALETTE[i % PIE_PALETTE.len()])
                    .collect();

                let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
                pie.start_angle(start_angle);
                pie.label_style(("sans-serif", 18).into_font().color(&RGBColor(40, 40, 40)));
                pie.percentages(
                    ("sans-serif", radius * 0.08)
                        .into_font()
                        .color(&RGBColor(255, 255, 255)),
                );

                chart_area.draw(&pie)?;
                root.present()?;
                Ok(())
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->generate_pie_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result.context("[ChartServiceImpl->generate_pie_chart] drawing/present failed")?;

        info!("Pie chart generated successfully: {:?}", output_path);

        Ok(())
    }

    async fn generate_placeholder_chart(
        &self,
        title: &str,
        notice: &str,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        self.prepare_output_path(output_path).await?;

        let chart_config = get_chart_config_info();
        let image_width: u32 = *chart_config.image_width();
        let image_height: u32 = *chart_config.image_height();

        let output_path_str: String = output_path.to_string_lossy().to_string();
        let title: String = title.to_string();
        let notice: String = notice.to_string();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                let root =
                    BitMapBackend::new(&output_path_str, (image_width, image_height))
                        .into_drawing_area();
                root.fill(&WHITE)?;

                let title_style = TextStyle::from(("sans-serif", 32).into_font())
                    .color(&RGBColor(40, 40, 40));
                let chart_area = root.titled(&title, title_style)?;

                let dims = chart_area.dim_in_pixel();
                let center: (i32, i32) = ((dims.0 / 2) as i32, (dims.1 / 2) as i32);

                let notice_style = ("sans-serif", 24)
                    .into_font()
                    .color(&RGBColor(130, 130, 130))
                    .pos(Pos::new(HPos::Center, VPos::Center));
                chart_area.draw(&Text::new(notice, center, notice_style))?;

                root.present()?;
                Ok(())
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->generate_placeholder_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result
            .context("[ChartServiceImpl->generate_placeholder_chart] drawing/present failed")?;

        info!("Placeholder chart generated successfully: {:?}", output_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mismatched_labels_and_values_are_rejected() {
        let chart_service: ChartServiceImpl = ChartServiceImpl::new();

        let result = chart_service
            .generate_pie_chart(
                "title",
                vec!["Widget".to_string()],
                vec![1, 2],
                Path::new("unused.png"),
            )
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn empty_data_is_rejected() {
        let chart_service: ChartServiceImpl = ChartServiceImpl::new();

        let result = chart_service
            .generate_pie_chart("title", vec![], vec![], Path::new("unused.png"))
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn all_zero_slices_are_rejected() {
        let chart_service: ChartServiceImpl = ChartServiceImpl::new();

        let result = chart_service
            .generate_pie_chart(
                "title",
                vec!["Widget".to_string(), "Gadget".to_string()],
                vec![0, 0],
                Path::new("unused.png"),
            )
            .await;

        assert!(result.is_err());
    }
}
