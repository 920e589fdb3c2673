//! Active employment record selection.

use crate::models::EmploymentRecord;

/// Selects the record that represents the employee's current status.
///
/// Returns the first record without a termination date. When every record is
/// terminated, returns the first record. Returns `None` for an empty slice.
///
/// The result depends on the order of `records`, which is whatever order the
/// data source returned; the records are deliberately not sorted by date.
///
/// # Example
///
/// ```
/// use employee_directory::derivation::select_active_record;
/// use employee_directory::models::EmploymentRecord;
///
/// let record = |id: i64, terminated: Option<&str>| EmploymentRecord {
///     id,
///     employee_num: format!("EMP{:03}", id),
///     employed_date: Some("2020-01-01".to_string()),
///     terminated_date: terminated.map(str::to_string),
///     created_at: None,
///     updated_at: None,
/// };
///
/// let records = vec![record(1, Some("2022-01-01")), record(2, None)];
/// assert_eq!(select_active_record(&records).map(|r| r.id), Some(2));
///
/// let all_terminated = vec![record(1, Some("2021-01-01")), record(2, Some("2022-01-01"))];
/// assert_eq!(select_active_record(&all_terminated).map(|r| r.id), Some(1));
///
/// assert!(select_active_record(&[]).is_none());
/// ```
pub fn select_active_record(records: &[EmploymentRecord]) -> Option<&EmploymentRecord> {
    records
        .iter()
        .find(|record| record.is_active())
        .or_else(|| records.first())
}
