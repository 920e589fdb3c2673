//! Lenient date parsing and display formatting.
//!
//! The data source is not strict about how it writes dates, so these helpers
//! accept the handful of shapes it has been seen to emit and report anything
//! else as `None` rather than failing.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

/// Label shown in place of a date that is missing or cannot be parsed.
pub const UNKNOWN_LABEL: &str = "Unknown";

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a timestamp string into a UTC instant.
///
/// Accepts RFC 3339 (`2024-05-01T08:00:00Z`, `2024-05-01T08:00:00+02:00`),
/// naive date-times (`2024-05-01T08:00:00`, optionally with fractional
/// seconds), which are taken as UTC, and bare dates (`2024-05-01`), which are
/// taken as UTC midnight. Empty input yields `None`.
///
/// # Example
///
/// ```
/// use employee_directory::derivation::parse_timestamp;
///
/// assert!(parse_timestamp("2024-05-01T08:00:00Z").is_some());
/// assert!(parse_timestamp("2024-05-01").is_some());
/// assert!(parse_timestamp("yesterday").is_none());
/// ```
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.with_timezone(&Utc));
    }

    parse_naive(raw).map(|naive| naive.and_utc())
}

/// Parses a date string into a calendar date.
///
/// Accepts the same shapes as [`parse_timestamp`]. For offset timestamps the
/// date is read in the offset it was written in, so `1990-12-10T00:00:00+02:00`
/// is December 10th.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }

    parse_naive(raw).map(|naive| naive.date())
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Counts whole years from `from` to `to`.
///
/// A year is only counted once its anniversary has been reached. Returns 0
/// when `to` precedes `from`.
///
/// # Example
///
/// ```
/// use employee_directory::derivation::whole_years_between;
/// use chrono::NaiveDate;
///
/// let from = NaiveDate::from_ymd_opt(2015, 3, 1).unwrap();
/// let day_before = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
/// let anniversary = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
///
/// assert_eq!(whole_years_between(from, day_before), 9);
/// assert_eq!(whole_years_between(from, anniversary), 10);
/// assert_eq!(whole_years_between(anniversary, from), 0);
/// ```
pub fn whole_years_between(from: NaiveDate, to: NaiveDate) -> u32 {
    if to < from {
        return 0;
    }

    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }

    u32::try_from(years).unwrap_or(0)
}

/// Formats a raw date as "Mar 1, 2015", or [`UNKNOWN_LABEL`].
pub fn format_date(raw: Option<&str>) -> String {
    format_with(raw, "%b %-d, %Y")
}

/// Formats a raw date as "March 1, 2015", or [`UNKNOWN_LABEL`].
pub fn format_date_long(raw: Option<&str>) -> String {
    format_with(raw, "%B %-d, %Y")
}

fn format_with(raw: Option<&str>, pattern: &str) -> String {
    raw.and_then(parse_calendar_date)
        .map(|date| date.format(pattern).to_string())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
}
