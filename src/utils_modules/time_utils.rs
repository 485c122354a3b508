use crate::common::*;

/* "Order Date" 컬럼에서 실제로 관측되는 날짜+시각 포맷들 */
const ORDER_DATE_DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%y %H:%M",
];

/* 시각 없이 날짜만 있는 포맷들. 자정으로 정규화한다. */
const ORDER_DATE_DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%d-%m-%Y"];

#[doc = r#"
    Best-effort parser for the raw "Order Date" column.

    Tries the known datetime formats first, then the date-only formats
    (normalized to midnight). Returns `None` when no format matches -
    callers drop such rows before any aggregation.
"#]
pub fn parse_order_date(raw: &str) -> Option<NaiveDateTime> {
    let trimmed: &str = raw.trim();

    if trimmed.is_empty() {
        return None;
    }

    for format in ORDER_DATE_DATETIME_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(timestamp);
        }
    }

    for format in ORDER_DATE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

#[doc = "주어진 날짜가 속한 ISO 주의 시작일(월요일)을 반환하는 함수"]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - ChronoDuration::days(date.weekday().num_days_from_monday() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_datetime_formats() {
        let expected: NaiveDateTime = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap();

        assert_eq!(parse_order_date("2024-01-02 10:15:00"), Some(expected));
        assert_eq!(parse_order_date("2024-01-02T10:15:00"), Some(expected));
        assert_eq!(parse_order_date("01/02/2024 10:15:00"), Some(expected));
    }

    #[test]
    fn date_only_values_normalize_to_midnight() {
        let expected: NaiveDateTime = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        assert_eq!(parse_order_date("2024-01-02"), Some(expected));
        assert_eq!(parse_order_date(" 01/02/2024 "), Some(expected));
    }

    #[test]
    fn unparseable_values_return_none() {
        assert_eq!(parse_order_date(""), None);
        assert_eq!(parse_order_date("   "), None);
        assert_eq!(parse_order_date("not-a-date"), None);
        assert_eq!(parse_order_date("2024-13-40"), None);
    }

    #[test]
    fn week_start_is_monday_aligned() {
        /* 2023-01-02 is itself a Monday */
        let monday: NaiveDate = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        assert_eq!(week_start(monday), monday);

        /* 2024-01-03 is a Wednesday, week starts 2024-01-01 */
        let wednesday: NaiveDate = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(
            week_start(wednesday),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );

        /* Sunday belongs to the week that started six days earlier */
        let sunday: NaiveDate = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(
            week_start(sunday),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }
}
