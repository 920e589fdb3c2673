//! Date rules for the employee form.
//!
//! All comparisons are between calendar dates, so a value on the same day as
//! its bound never violates it.

use chrono::NaiveDate;

/// Checks the birth date: required, not after today.
pub fn check_birth_date(value: Option<NaiveDate>, today: NaiveDate) -> Option<String> {
    let Some(birth_date) = value else {
        return Some("Birth date is required".to_string());
    };
    if birth_date > today {
        return Some("Birth date must be in the past".to_string());
    }
    None
}

/// Checks the employment start date: required, not after today, not before
/// January 1st of `founding_year`.
pub fn check_employed_date(
    value: Option<NaiveDate>,
    today: NaiveDate,
    founding_year: i32,
) -> Option<String> {
    let Some(employed_date) = value else {
        return Some("Employed date is required".to_string());
    };
    if employed_date > today {
        return Some("Employed date cannot be in the future".to_string());
    }
    if let Some(founding) = NaiveDate::from_ymd_opt(founding_year, 1, 1) {
        if employed_date < founding {
            return Some(format!("Employed date cannot be before {}", founding_year));
        }
    }
    None
}

/// Checks the termination date: optional; when present, not after today and
/// not before the employment start date.
///
/// While the start date is empty it is taken to be today, so only a
/// same-day termination passes the ordering rule.
pub fn check_terminated_date(
    value: Option<NaiveDate>,
    employed_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Option<String> {
    let terminated_date = value?;
    if terminated_date > today {
        return Some("Terminated date cannot be in the future".to_string());
    }
    if terminated_date < employed_date.unwrap_or(today) {
        return Some("Terminated date cannot be before employed date".to_string());
    }
    None
}
