//! Aggregates over employment start dates.

use std::cmp::Reverse;

use chrono::NaiveDate;

use crate::models::{Employee, EmploymentRecord};

use super::dates::parse_calendar_date;

/// The earliest employment start date across every record of every employee.
///
/// All records are considered, terminated or not, not just each employee's
/// active record. Records whose start date is missing or unparsable are
/// skipped. Returns `None` when no record has a usable start date, which
/// includes an empty input.
///
/// # Example
///
/// ```
/// use employee_directory::derivation::earliest_hire_date;
///
/// assert_eq!(earliest_hire_date(&[]), None);
/// ```
pub fn earliest_hire_date(employees: &[Employee]) -> Option<NaiveDate> {
    employees
        .iter()
        .flat_map(|employee| employee.employment_records.iter())
        .filter_map(|record| record.employed_date.as_deref().and_then(parse_calendar_date))
        .min()
}

/// Records ordered by start date, most recent first.
///
/// Records without a usable start date go last, in their original order.
/// This ordering is for display only; it never feeds
/// [`select_active_record`](super::select_active_record).
pub fn employment_history(records: &[EmploymentRecord]) -> Vec<&EmploymentRecord> {
    let mut history: Vec<&EmploymentRecord> = records.iter().collect();
    history.sort_by_key(|record| {
        let started = record.employed_date.as_deref().and_then(parse_calendar_date);
        (started.is_none(), Reverse(started))
    });
    history
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, employed: Option<&str>) -> EmploymentRecord {
        EmploymentRecord {
            id,
            employee_num: format!("EMP{:03}", id),
            employed_date: employed.map(str::to_string),
            terminated_date: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn employee(id: &str, records: Vec<EmploymentRecord>) -> Employee {
        Employee {
            id: id.to_string(),
            first_name: "Test".to_string(),
            last_name: "Person".to_string(),
            birth_date: None,
            employment_records: records,
            created_at: None,
            updated_at: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_earliest_hire_across_employees() {
        let employees = vec![
            employee("a", vec![record(1, Some("2015-03-01T00:00:00"))]),
            employee("b", vec![record(2, Some("2010-07-01T00:00:00"))]),
        ];

        assert_eq!(earliest_hire_date(&employees), Some(date(2010, 7, 1)));
    }

    #[test]
    fn test_earliest_hire_includes_terminated_records() {
        let mut old = record(3, Some("2001-01-01"));
        old.terminated_date = Some("2002-01-01".to_string());
        let employees = vec![employee("a", vec![record(4, Some("2019-01-01")), old])];

        assert_eq!(earliest_hire_date(&employees), Some(date(2001, 1, 1)));
    }

    #[test]
    fn test_earliest_hire_skips_unusable_dates() {
        let employees = vec![employee(
            "a",
            vec![record(1, None), record(2, Some("garbage")), record(3, Some("2018-05-05"))],
        )];

        assert_eq!(earliest_hire_date(&employees), Some(date(2018, 5, 5)));
    }

    #[test]
    fn test_earliest_hire_without_records_is_none() {
        assert_eq!(earliest_hire_date(&[employee("a", vec![])]), None);
    }

    #[test]
    fn test_history_most_recent_first_with_undated_last() {
        let records = vec![
            record(1, Some("2010-01-01")),
            record(2, None),
            record(3, Some("2020-01-01")),
            record(4, Some("2015-01-01")),
        ];

        let ids: Vec<i64> = employment_history(&records).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 4, 1, 2]);
    }
}
