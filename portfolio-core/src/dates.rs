//! Calendar-date helpers. Dates carry no time zone; all comparisons are by
//! calendar day.

use chrono::NaiveDate;

use crate::error::{PortfolioError, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO `YYYY-MM-DD` string, naming `field` in the error.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| PortfolioError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Render a date as `Jan 15, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Whole days from `today` until `end_date`; zero once the date has passed.
pub fn days_remaining(end_date: NaiveDate, today: NaiveDate) -> u32 {
    let days = (end_date - today).num_days();
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_date("start_date", "2025-01-15").unwrap(), day(2025, 1, 15));
        assert_eq!(parse_date("start_date", " 2025-01-15 ").unwrap(), day(2025, 1, 15));
    }

    #[test]
    fn rejects_non_iso_dates() {
        let err = parse_date("end_date", "15.01.2025").unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidDate { field: "end_date", .. }));
    }

    #[test]
    fn formats_short_month() {
        assert_eq!(format_date(day(2025, 1, 5)), "Jan 5, 2025");
        assert_eq!(format_date(day(2025, 6, 30)), "Jun 30, 2025");
    }

    #[test]
    fn days_remaining_never_negative() {
        assert_eq!(days_remaining(day(2025, 6, 30), day(2025, 6, 1)), 29);
        assert_eq!(days_remaining(day(2025, 6, 30), day(2025, 6, 30)), 0);
        assert_eq!(days_remaining(day(2025, 6, 30), day(2025, 7, 15)), 0);
    }
}
