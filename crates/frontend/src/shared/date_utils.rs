/// Utilities for date and time formatting
///
/// Chat bubbles show a short clock time, the file list a numeric date.
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};
use std::fmt::Display;

/// Format a timestamp as HH:MM in its own zone
/// Example: 2024-03-15T14:02:26Z -> "14:02"
pub fn format_clock<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    datetime.format("%H:%M").to_string()
}

/// HH:MM in the browser's local zone
pub fn format_local_clock<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String {
    format_clock(&datetime.with_timezone(&Local))
}

/// Format a date as M/D/YYYY
/// Example: 2024-03-05 -> "3/5/2024"
pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Today's date in the browser's local zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_clock() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_clock(&dt), "14:02");
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 9, 5, 0).unwrap();
        assert_eq!(format_clock(&dt), "09:05");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()), "3/5/2024");
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()), "12/31/2024");
    }
}
