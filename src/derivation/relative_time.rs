//! Update-recency labels.
//!
//! Phrases follow the usual "from now" ladder: seconds collapse to "a few
//! seconds", then minutes, hours, days, months and years, each unit taking
//! over once the previous one rounds past its threshold.

use chrono::{DateTime, Utc};

use crate::models::EmploymentRecord;

use super::dates::{UNKNOWN_LABEL, parse_timestamp};

const DAYS_PER_MONTH: f64 = 365.25 / 12.0;

/// Human-readable time since the record was last updated, e.g. "3 days ago".
///
/// Returns [`UNKNOWN_LABEL`] when the update timestamp is missing or
/// unparsable.
pub fn relative_update_label(record: &EmploymentRecord) -> String {
    relative_update_label_at(record, Utc::now())
}

/// [`relative_update_label`] evaluated at a fixed instant.
///
/// # Example
///
/// ```
/// use employee_directory::derivation::relative_update_label_at;
/// use employee_directory::models::EmploymentRecord;
/// use chrono::{TimeZone, Utc};
///
/// let record = EmploymentRecord {
///     id: 1,
///     employee_num: "EMP001".to_string(),
///     employed_date: None,
///     terminated_date: None,
///     created_at: None,
///     updated_at: Some("2025-06-12T09:00:00Z".to_string()),
/// };
///
/// let now = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();
/// assert_eq!(relative_update_label_at(&record, now), "3 days ago");
/// ```
pub fn relative_update_label_at(record: &EmploymentRecord, now: DateTime<Utc>) -> String {
    match record.updated_at.as_deref().and_then(parse_timestamp) {
        Some(updated) => relative_label(updated, now),
        None => UNKNOWN_LABEL.to_string(),
    }
}

/// Whole days since the record was last updated.
///
/// Returns 0 when the timestamp is missing, unparsable, or in the future.
pub fn days_since_update(record: &EmploymentRecord) -> i64 {
    days_since_update_at(record, Utc::now())
}

/// [`days_since_update`] evaluated at a fixed instant.
pub fn days_since_update_at(record: &EmploymentRecord, now: DateTime<Utc>) -> i64 {
    record
        .updated_at
        .as_deref()
        .and_then(parse_timestamp)
        .map(|updated| (now - updated).num_days().max(0))
        .unwrap_or(0)
}

/// Describes the distance from `now` to `then` as a phrase.
pub fn relative_label(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_secs = (now - then).num_milliseconds() as f64 / 1000.0;
    let phrase = distance_phrase(elapsed_secs.abs());

    if elapsed_secs < 0.0 {
        format!("in {}", phrase)
    } else {
        format!("{} ago", phrase)
    }
}

fn distance_phrase(secs: f64) -> String {
    if secs.round() <= 44.0 {
        return "a few seconds".to_string();
    }
    if secs.round() <= 89.0 {
        return "a minute".to_string();
    }

    let minutes = (secs / 60.0).round();
    if minutes <= 44.0 {
        return counted(minutes, "a minute", "minutes");
    }
    if minutes <= 89.0 {
        return "an hour".to_string();
    }

    let hours = (secs / 3600.0).round();
    if hours <= 21.0 {
        return counted(hours, "an hour", "hours");
    }
    if hours <= 35.0 {
        return "a day".to_string();
    }

    let days_exact = secs / 86_400.0;
    let days = days_exact.round();
    if days <= 25.0 {
        return counted(days, "a day", "days");
    }
    if days <= 45.0 {
        return "a month".to_string();
    }

    let months = (days_exact / DAYS_PER_MONTH).round();
    if months <= 10.0 {
        return counted(months, "a month", "months");
    }
    if months <= 17.0 {
        return "a year".to_string();
    }

    let years = (days_exact / (DAYS_PER_MONTH * 12.0)).round();
    counted(years, "a year", "years")
}

fn counted(value: f64, single: &str, plural_unit: &str) -> String {
    if value <= 1.0 {
        single.to_string()
    } else {
        format!("{} {}", value as i64, plural_unit)
    }
}
