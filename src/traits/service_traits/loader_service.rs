use crate::common::*;

use crate::dto::order_load_result::*;

#[async_trait]
pub trait LoaderService: Send + Sync {
    #[doc = "
        Load the order CSV, drop rows whose date or product cannot be used,
        and derive the year/date/week-start fields per surviving row.
        # Arguments
        * `csv_path` - Path to the order CSV file
    "]
    async fn load_orders(&self, csv_path: &Path) -> anyhow::Result<OrderLoadResult>;
}
