use crate::common::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Render a pie chart image and save it to `output_path`, replacing any
        previous file at that path.
        # Arguments
        * `title` - Chart title
        * `labels` - One label per slice
        * `values` - One value per slice, same length as `labels`
        * `output_path` - Path where the chart image will be saved
    "]
    async fn generate_pie_chart(
        &self,
        title: &str,
        labels: Vec<String>,
        values: Vec<u64>,
        output_path: &Path,
    ) -> anyhow::Result<()>;

    #[doc = "
        Render a title-plus-notice placeholder image for the case where there
        is nothing to chart. Same overwrite policy as `generate_pie_chart`.
    "]
    async fn generate_placeholder_chart(
        &self,
        title: &str,
        notice: &str,
        output_path: &Path,
    ) -> anyhow::Result<()>;
}
