use crate::common::*;

use crate::dto::{weekly_order_pivot::*, yearly_order_count::*};
use crate::model::order::order_event::*;
use crate::traits::service_traits::aggregation_service::*;

#[derive(Debug, Clone, new)]
pub struct AggregationServiceImpl;

impl AggregationService for AggregationServiceImpl {
    fn aggregate_yearly(&self, orders: &[OrderEvent]) -> Vec<YearlyOrderCount> {
        let mut counts: HashMap<(i32, String), u64> = HashMap::new();
        /* 동률 정렬의 타이브레이크는 CSV 등장 순서 */
        let mut encounter_order: Vec<(i32, String)> = Vec::new();

        for order in orders {
            let key: (i32, String) = (*order.year(), order.product().clone());
            let entry: &mut u64 = counts.entry(key.clone()).or_insert(0);
            if *entry == 0 {
                encounter_order.push(key);
            }
            *entry += 1;
        }

        let mut records: Vec<YearlyOrderCount> = encounter_order
            .into_iter()
            .map(|(year, product)| {
                let count: u64 = counts[&(year, product.clone())];
                YearlyOrderCount::new(year, product, count)
            })
            .collect();

        /* stable sort keeps encounter order for equal (year, count) */
        records.sort_by(|a, b| b.year.cmp(&a.year).then(b.count.cmp(&a.count)));

        records
    }

    fn pivot_weekly(&self, orders: &[OrderEvent]) -> WeeklyOrderPivot {
        let mut week_set: BTreeSet<NaiveDate> = BTreeSet::new();
        let mut product_set: BTreeSet<String> = BTreeSet::new();
        let mut cell_counts: HashMap<(NaiveDate, String), f64> = HashMap::new();

        for order in orders {
            let week: NaiveDate = *order.week_start();
            week_set.insert(week);
            product_set.insert(order.product().clone());
            *cell_counts
                .entry((week, order.product().clone()))
                .or_insert(0.0) += 1.0;
        }

        let weeks: Vec<NaiveDate> = week_set.into_iter().collect();

        let series: Vec<ProductWeeklySeries> = product_set
            .into_iter()
            .map(|product| {
                let counts: Vec<f64> = weeks
                    .iter()
                    .map(|week| {
                        cell_counts
                            .get(&(*week, product.clone()))
                            .copied()
                            .unwrap_or(0.0)
                    })
                    .collect();
                ProductWeeklySeries::new(product, counts)
            })
            .collect();

        WeeklyOrderPivot::new(weeks, series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils_modules::time_utils::*;

    fn order(date: (i32, u32, u32), product: &str) -> OrderEvent {
        let naive_date: NaiveDate = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        let timestamp: NaiveDateTime = naive_date.and_hms_opt(12, 0, 0).unwrap();
        OrderEvent::new(
            timestamp,
            product.to_string(),
            naive_date.year(),
            naive_date,
            week_start(naive_date),
        )
    }

    #[test]
    fn latest_year_records_sort_before_older_years() {
        let orders: Vec<OrderEvent> = vec![
            order((2023, 1, 2), "Widget"),
            order((2023, 1, 9), "Widget"),
            order((2024, 1, 2), "Widget"),
            order((2024, 1, 2), "Gadget"),
        ];

        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let records: Vec<YearlyOrderCount> = service.aggregate_yearly(&orders);

        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0],
            YearlyOrderCount::new(2024, "Widget".to_string(), 1)
        );
        assert_eq!(
            records[1],
            YearlyOrderCount::new(2024, "Gadget".to_string(), 1)
        );
        assert_eq!(
            records[2],
            YearlyOrderCount::new(2023, "Widget".to_string(), 2)
        );
    }

    #[test]
    fn per_year_counts_sum_to_row_count() {
        let orders: Vec<OrderEvent> = vec![
            order((2024, 2, 5), "Widget"),
            order((2024, 2, 6), "Widget"),
            order((2024, 2, 7), "Gadget"),
            order((2023, 3, 1), "Widget"),
        ];

        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let records: Vec<YearlyOrderCount> = service.aggregate_yearly(&orders);

        let total_2024: u64 = records
            .iter()
            .filter(|r| *r.year() == 2024)
            .map(|r| *r.count())
            .sum();
        assert_eq!(total_2024, 3);

        let total_2023: u64 = records
            .iter()
            .filter(|r| *r.year() == 2023)
            .map(|r| *r.count())
            .sum();
        assert_eq!(total_2023, 1);
    }

    #[test]
    fn within_year_sorting_is_count_descending_with_encounter_tie_break() {
        let orders: Vec<OrderEvent> = vec![
            order((2024, 1, 2), "Gadget"),
            order((2024, 1, 3), "Widget"),
            order((2024, 1, 4), "Widget"),
            order((2024, 1, 5), "Doohickey"),
        ];

        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let records: Vec<YearlyOrderCount> = service.aggregate_yearly(&orders);

        let products: Vec<&str> = records.iter().map(|r| r.product().as_str()).collect();
        /* Widget leads with 2 orders; Gadget and Doohickey tie at 1 and keep
        their CSV encounter order */
        assert_eq!(products, vec!["Widget", "Gadget", "Doohickey"]);
    }

    #[test]
    fn weekly_pivot_fills_missing_cells_with_zero() {
        let orders: Vec<OrderEvent> = vec![
            order((2024, 1, 2), "Widget"),
            order((2024, 1, 3), "Widget"),
            order((2024, 1, 9), "Gadget"),
        ];

        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let pivot: WeeklyOrderPivot = service.pivot_weekly(&orders);

        assert_eq!(
            pivot.weeks(),
            &vec![
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            ]
        );

        /* pivot columns come out in lexicographic product order */
        assert_eq!(pivot.series().len(), 2);
        assert_eq!(pivot.series()[0].product(), "Gadget");
        assert_eq!(pivot.series()[0].counts(), &vec![0.0, 1.0]);
        assert_eq!(pivot.series()[1].product(), "Widget");
        assert_eq!(pivot.series()[1].counts(), &vec![2.0, 0.0]);
    }

    #[test]
    fn empty_input_produces_empty_outputs() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();

        assert!(service.aggregate_yearly(&[]).is_empty());

        let pivot: WeeklyOrderPivot = service.pivot_weekly(&[]);
        assert!(pivot.weeks().is_empty());
        assert!(pivot.series().is_empty());
    }
}
