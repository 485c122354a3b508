use crate::common::*;

use crate::dto::order_load_result::*;
use crate::model::order::{order_event::*, order_record::*};
use crate::traits::service_traits::loader_service::*;
use crate::utils_modules::time_utils::*;

#[derive(Debug, Clone, new)]
pub struct LoaderServiceImpl;

#[doc = r#"
    CSV 를 한 행씩 역직렬화하면서 정제한다.

    1. 역직렬화 자체가 실패한 행은 버린다
    2. "Order Date" 가 결측이거나 파싱 불가능한 행은 버린다
    3. "Product" 가 결측/공백인 행은 버린다 (집계 키가 없으므로)
    4. 살아남은 행은 year/date/week_start 를 유도해 OrderEvent 로 만든다
"#]
fn read_order_rows(csv_path: &Path) -> anyhow::Result<OrderLoadResult> {
    let mut reader: csv::Reader<std::fs::File> = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(csv_path)
        .map_err(|e| {
            anyhow!(
                "[LoaderServiceImpl->load_orders] Failed to open '{}': {:?}",
                csv_path.display(),
                e
            )
        })?;

    let mut orders: Vec<OrderEvent> = Vec::new();
    let mut dropped_rows: usize = 0;

    for record in reader.deserialize::<RawOrderRecord>() {
        let row: RawOrderRecord = match record {
            Ok(row) => row,
            Err(_) => {
                dropped_rows += 1;
                continue;
            }
        };

        let order_date: NaiveDateTime =
            match row.order_date.as_deref().and_then(parse_order_date) {
                Some(timestamp) => timestamp,
                None => {
                    dropped_rows += 1;
                    continue;
                }
            };

        let product: String = match row.product {
            Some(product) if !product.trim().is_empty() => product.trim().to_string(),
            _ => {
                dropped_rows += 1;
                continue;
            }
        };

        let date: NaiveDate = order_date.date();

        orders.push(OrderEvent::new(
            order_date,
            product,
            date.year(),
            date,
            week_start(date),
        ));
    }

    Ok(OrderLoadResult::new(orders, dropped_rows))
}

#[async_trait]
impl LoaderService for LoaderServiceImpl {
    async fn load_orders(&self, csv_path: &Path) -> anyhow::Result<OrderLoadResult> {
        let owned_path: PathBuf = csv_path.to_path_buf();

        let handle: tokio::task::JoinHandle<anyhow::Result<OrderLoadResult>> =
            tokio::task::spawn_blocking(move || read_order_rows(&owned_path));

        let load_result: anyhow::Result<OrderLoadResult> = handle.await.context(
            "[LoaderServiceImpl->load_orders] blocking task join failed (panic/cancelled)",
        )?;

        load_result
    }
}
