//! Date and time formatting for the es-MX locale.
//!
//! Dates render as `15 de marzo de 2024`, times as a two-digit 24-hour
//! `09:05`. Date-only input is treated as a calendar date and is never
//! shifted by the local time zone; input carrying an offset is converted to
//! local time first.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Timelike};

use crate::error::FormatError;

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

// `%.f` also matches a missing fraction
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parse the date formats the server emits into local wall-clock time
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime, FormatError> {
    let s = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| FormatError::InvalidDate(input.to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Local).naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| FormatError::InvalidDate(input.to_string()))
}

fn from_millis(millis: i64) -> Result<NaiveDateTime, FormatError> {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&Local).naive_local())
        .ok_or_else(|| FormatError::InvalidDate(millis.to_string()))
}

/// Whole milliseconds from a JS number. NaN and infinities are invalid dates.
pub fn millis_from_f64(value: f64) -> Result<i64, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::InvalidDate(value.to_string()));
    }
    Ok(value.trunc() as i64)
}

/// Long es-MX date, e.g. `15 de marzo de 2024`
pub fn format_date(input: &str) -> Result<String, FormatError> {
    parse_datetime(input).map(|dt| long_date(&dt))
}

/// Two-digit hour and minute, e.g. `09:05`
pub fn format_time(input: &str) -> Result<String, FormatError> {
    parse_datetime(input).map(|dt| short_time(&dt))
}

/// [`format_date`] for a Unix timestamp in milliseconds
pub fn format_date_millis(millis: i64) -> Result<String, FormatError> {
    from_millis(millis).map(|dt| long_date(&dt))
}

/// [`format_time`] for a Unix timestamp in milliseconds
pub fn format_time_millis(millis: i64) -> Result<String, FormatError> {
    from_millis(millis).map(|dt| short_time(&dt))
}

pub fn long_date(dt: &NaiveDateTime) -> String {
    format!(
        "{} de {} de {}",
        dt.day(),
        MONTHS[dt.month0() as usize],
        dt.year()
    )
}

pub fn short_time(dt: &NaiveDateTime) -> String {
    format!("{:02}:{:02}", dt.hour(), dt.minute())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_only_is_not_shifted() {
        assert_eq!(format_date("2024-03-15").unwrap(), "15 de marzo de 2024");
        assert_eq!(format_date("2026-01-01").unwrap(), "1 de enero de 2026");
        assert_eq!(format_date(" 2025-12-31 ").unwrap(), "31 de diciembre de 2025");
    }

    #[test]
    fn test_server_timestamp_format() {
        // Grades API emits "%Y-%m-%d %H:%M"
        assert_eq!(format_date("2024-09-02 08:05").unwrap(), "2 de septiembre de 2024");
        assert_eq!(format_time("2024-09-02 08:05").unwrap(), "08:05");
        assert_eq!(format_time("2024-09-02T17:30:59").unwrap(), "17:30");
        assert_eq!(format_time("2024-09-02").unwrap(), "00:00");
    }

    #[test]
    fn test_fractional_seconds() {
        assert_eq!(
            format_date("2024-09-02T08:05:30.123456").unwrap(),
            "2 de septiembre de 2024"
        );
        assert_eq!(format_time("2024-09-02T08:05:30.123456").unwrap(), "08:05");
        assert_eq!(format_time("2024-09-02 23:59:59.5").unwrap(), "23:59");
    }

    #[test]
    fn test_non_finite_millis_rejected() {
        assert!(millis_from_f64(f64::NAN).is_err());
        assert!(millis_from_f64(f64::INFINITY).is_err());
        assert!(millis_from_f64(f64::NEG_INFINITY).is_err());
        assert_eq!(millis_from_f64(1_718_020_800_000.9).unwrap(), 1_718_020_800_000);
        assert_eq!(millis_from_f64(0.0).unwrap(), 0);
    }

    #[test]
    fn test_offset_input_uses_local_time() {
        let input = "2024-06-10T12:00:00Z";
        let expected = DateTime::parse_from_rfc3339(input)
            .unwrap()
            .with_timezone(&Local)
            .naive_local();

        assert_eq!(format_date(input).unwrap(), long_date(&expected));
        assert_eq!(format_time(input).unwrap(), short_time(&expected));
    }

    #[test]
    fn test_millis() {
        let millis = 1_718_020_800_000; // 2024-06-10T12:00:00Z
        let expected = DateTime::from_timestamp_millis(millis)
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(format_date_millis(millis).unwrap(), long_date(&expected));
        assert_eq!(format_time_millis(millis).unwrap(), short_time(&expected));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            format_date("ayer"),
            Err(FormatError::InvalidDate("ayer".to_string()))
        );
        assert!(format_time("2024-13-40").is_err());
        assert!(format_date("").is_err());
    }
}
