use crate::common::*;

use crate::dto::{product_forecast::*, weekly_order_pivot::*};
use crate::model::forecast::arima_model::*;
use crate::traits::service_traits::forecast_service::*;

/* 주문이 실린 주가 이보다 적으면 적합할 자기상관 구조가 없다 */
const MIN_ACTIVE_WEEKS: usize = 2;

#[derive(Debug, Clone, new)]
pub struct ForecastServiceImpl {
    model_spec: ArimaModel,
}

impl ForecastServiceImpl {
    #[doc = r#"
        상품 하나의 주간 시계열에 모델을 적합하고 다음 주 한 스텝을 예측한다.
        예측값은 반올림 후 0 미만을 잘라낸 정수로 돌려준다.
    "#]
    fn forecast_product(&self, series: &ProductWeeklySeries) -> anyhow::Result<u64> {
        let counts: &[f64] = series.counts();

        let active_weeks: usize = counts.iter().filter(|count| **count > 0.0).count();
        if active_weeks < MIN_ACTIVE_WEEKS {
            return Err(anyhow!(
                "[ForecastServiceImpl->forecast_product] Insufficient observations: only {} week(s) with orders for '{}'",
                active_weeks,
                series.product()
            ));
        }

        let fitted: FittedArima = self.model_spec.fit(counts)?;
        let predicted: f64 = fitted.forecast_one();

        Ok(predicted.round().max(0.0) as u64)
    }
}

impl ForecastService for ForecastServiceImpl {
    fn forecast_next_week(&self, pivot: &WeeklyOrderPivot) -> Vec<ProductForecast> {
        /* 상품별 적합은 서로 독립이다. 하나가 실패해도 나머지는 계속 진행한다. */
        let mut outcomes: Vec<(String, anyhow::Result<u64>)> =
            Vec::with_capacity(pivot.series().len());

        for product_series in pivot.series() {
            let outcome: anyhow::Result<u64> = self.forecast_product(product_series);
            outcomes.push((product_series.product().clone(), outcome));
        }

        let mut records: Vec<ProductForecast> = Vec::new();
        for (product, outcome) in outcomes {
            match outcome {
                Ok(predicted) => records.push(ProductForecast::new(product, predicted)),
                Err(e) => {
                    error!(
                        "[ForecastServiceImpl->forecast_next_week] Forecast failed for '{}': {:?}",
                        product, e
                    );
                }
            }
        }

        records.sort_by(|a, b| b.predicted_next_week.cmp(&a.predicted_next_week));

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pivot_of(series: Vec<(&str, Vec<f64>)>, weeks: usize) -> WeeklyOrderPivot {
        let week_dates: Vec<NaiveDate> = (0..weeks)
            .map(|i| {
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + ChronoDuration::weeks(i as i64)
            })
            .collect();

        let product_series: Vec<ProductWeeklySeries> = series
            .into_iter()
            .map(|(product, counts)| ProductWeeklySeries::new(product.to_string(), counts))
            .collect();

        WeeklyOrderPivot::new(week_dates, product_series)
    }

    fn default_service() -> ForecastServiceImpl {
        ForecastServiceImpl::new(ArimaModel::new(1, 1, 1))
    }

    #[test]
    fn single_active_week_product_is_excluded() {
        let pivot: WeeklyOrderPivot = pivot_of(
            vec![
                ("Widget", vec![3.0, 4.0, 5.0, 4.0, 6.0, 5.0]),
                ("Doohickey", vec![0.0, 0.0, 2.0, 0.0, 0.0, 0.0]),
            ],
            6,
        );

        let records: Vec<ProductForecast> = default_service().forecast_next_week(&pivot);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].product(), "Widget");
    }

    #[test]
    fn short_pivot_fails_every_product() {
        let pivot: WeeklyOrderPivot = pivot_of(
            vec![("Widget", vec![2.0, 3.0]), ("Gadget", vec![1.0, 1.0])],
            2,
        );

        let records: Vec<ProductForecast> = default_service().forecast_next_week(&pivot);

        assert!(records.is_empty());
    }

    #[test]
    fn constant_demand_forecasts_last_value_and_sorts_descending() {
        let pivot: WeeklyOrderPivot = pivot_of(
            vec![
                ("Gadget", vec![2.0; 6]),
                ("Widget", vec![10.0; 6]),
            ],
            6,
        );

        let records: Vec<ProductForecast> = default_service().forecast_next_week(&pivot);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].product(), "Widget");
        assert_eq!(*records[0].predicted_next_week(), 10);
        assert_eq!(records[1].product(), "Gadget");
        assert_eq!(*records[1].predicted_next_week(), 2);
    }

    #[test]
    fn negative_forecasts_clamp_to_zero() {
        /* AR(1) on a strongly alternating series predicts below zero from a
        positive last observation */
        let service: ForecastServiceImpl = ForecastServiceImpl::new(ArimaModel::new(1, 0, 0));
        let pivot: WeeklyOrderPivot = pivot_of(
            vec![("Widget", vec![4.0, 0.0, 4.0, 0.0, 4.0, 0.0, 4.0])],
            7,
        );

        let records: Vec<ProductForecast> = service.forecast_next_week(&pivot);

        assert_eq!(records.len(), 1);
        assert_eq!(*records[0].predicted_next_week(), 0);
    }

    #[test]
    fn at_most_one_record_per_product() {
        let pivot: WeeklyOrderPivot = pivot_of(
            vec![
                ("Widget", vec![3.0, 4.0, 5.0, 4.0, 6.0, 5.0]),
                ("Gadget", vec![1.0, 2.0, 1.0, 3.0, 2.0, 2.0]),
            ],
            6,
        );

        let records: Vec<ProductForecast> = default_service().forecast_next_week(&pivot);

        let mut products: Vec<&str> = records.iter().map(|r| r.product().as_str()).collect();
        products.sort();
        products.dedup();
        assert_eq!(products.len(), records.len());
    }
}
