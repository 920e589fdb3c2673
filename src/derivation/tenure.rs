//! Age and years-of-service calculations.

use chrono::{DateTime, Utc};

use crate::models::{Employee, EmploymentRecord};

use super::dates::{parse_calendar_date, whole_years_between};

/// Whole years elapsed since the record's employment start date.
///
/// Returns 0 when the start date is missing, unparsable, or later than today.
pub fn years_of_service(record: &EmploymentRecord) -> u32 {
    years_of_service_at(record, Utc::now())
}

/// [`years_of_service`] evaluated at a fixed instant.
///
/// # Example
///
/// ```
/// use employee_directory::derivation::years_of_service_at;
/// use employee_directory::models::EmploymentRecord;
/// use chrono::{TimeZone, Utc};
///
/// let record = EmploymentRecord {
///     id: 1,
///     employee_num: "EMP001".to_string(),
///     employed_date: Some("2022-01-02".to_string()),
///     terminated_date: None,
///     created_at: None,
///     updated_at: None,
/// };
///
/// let now = Utc.with_ymd_and_hms(2025, 1, 2, 12, 0, 0).unwrap();
/// assert_eq!(years_of_service_at(&record, now), 3);
/// ```
pub fn years_of_service_at(record: &EmploymentRecord, now: DateTime<Utc>) -> u32 {
    elapsed_years(record.employed_date.as_deref(), now)
}

/// The employee's age in whole years.
///
/// Returns 0 when the birth date is missing, unparsable, or later than today.
pub fn age(employee: &Employee) -> u32 {
    age_at(employee, Utc::now())
}

/// [`age`] evaluated at a fixed instant.
pub fn age_at(employee: &Employee, now: DateTime<Utc>) -> u32 {
    elapsed_years(employee.birth_date.as_deref(), now)
}

fn elapsed_years(raw: Option<&str>, now: DateTime<Utc>) -> u32 {
    raw.and_then(parse_calendar_date)
        .map(|start| whole_years_between(start, now.date_naive()))
        .unwrap_or(0)
}
