//! Date formatting for list cells and cards.

use chrono::{DateTime, NaiveDate, Utc};

/// Calendar date -> "Apr 1, 2025".
pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Typed timestamp -> "Apr 1, 2025 14:02".
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_naive_date() {
        let d = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        assert_eq!(format_naive_date(d), "Apr 1, 2025");
    }

    #[test]
    fn test_format_timestamp() {
        let dt = Utc.with_ymd_and_hms(2025, 1, 25, 10, 0, 0).unwrap();
        assert_eq!(format_timestamp(dt), "Jan 25, 2025 10:00");
    }
}
