//! Response view models.
//!
//! Each view bundles an employee snapshot with the metrics derived from it,
//! so presentation code renders values instead of recomputing them.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::derivation::{
    UNKNOWN_LABEL, age_at, days_since_update_at, earliest_hire_date, employment_history,
    format_date, format_date_long, relative_update_label_at, select_active_record,
    service_progress_percent, years_of_service_at,
};
use crate::models::{Employee, EmploymentRecord};

/// Summary shown for an employee in lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCardView {
    /// Employee id.
    pub id: String,
    /// "First Last".
    pub name: String,
    /// Employee number of the active record.
    pub employee_num: Option<String>,
    /// Whether the active record is unterminated.
    pub is_active: bool,
    /// Age in whole years.
    pub age: u32,
    /// Whole years on the active record.
    pub years_of_service: u32,
    /// Progress indicator fill, 0 to 100.
    pub service_progress_percent: Decimal,
    /// Start date of the active record, e.g. "Mar 1, 2015".
    pub hired_label: String,
    /// Birth date, e.g. "Dec 10, 1990".
    pub birth_date_label: String,
    /// Termination date of the active record, if terminated.
    pub terminated_label: Option<String>,
    /// Whole days since the active record changed.
    pub days_since_update: i64,
    /// e.g. "3 days ago".
    pub updated_label: String,
    /// When the employee was created, e.g. "Mar 1, 2015".
    pub created_label: String,
    /// Number of employment records.
    pub employment_count: usize,
}

impl EmployeeCardView {
    /// Derives the card for `employee` as of `now`.
    ///
    /// An employee without employment records gets zero service, an
    /// inactive flag and "Unknown" employment labels.
    pub fn build(employee: &Employee, service_cap_years: u32, now: DateTime<Utc>) -> Self {
        let active = select_active_record(&employee.employment_records);
        let years_of_service = active.map_or(0, |record| years_of_service_at(record, now));

        Self {
            id: employee.id.clone(),
            name: employee.display_name(),
            employee_num: active.map(|record| record.employee_num.clone()),
            is_active: active.is_some_and(EmploymentRecord::is_active),
            age: age_at(employee, now),
            years_of_service,
            service_progress_percent: service_progress_percent(years_of_service, service_cap_years),
            hired_label: format_date(active.and_then(|record| record.employed_date.as_deref())),
            birth_date_label: format_date(employee.birth_date.as_deref()),
            terminated_label: active
                .filter(|record| !record.is_active())
                .map(|record| format_date(record.terminated_date.as_deref())),
            days_since_update: active.map_or(0, |record| days_since_update_at(record, now)),
            updated_label: active.map_or_else(
                || UNKNOWN_LABEL.to_string(),
                |record| relative_update_label_at(record, now),
            ),
            created_label: format_date(employee.created_at.as_deref()),
            employment_count: employee.employment_records.len(),
        }
    }
}

/// One row of an employee's employment history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Record id.
    pub id: i64,
    /// Employee number on that record.
    pub employee_num: String,
    /// e.g. "Mar 1, 2015 - Present".
    pub period_label: String,
    /// "Active" or "Terminated".
    pub status: String,
    /// When the record was created.
    pub created_label: String,
}

impl HistoryEntry {
    fn from_record(record: &EmploymentRecord) -> Self {
        let end = if record.is_active() {
            "Present".to_string()
        } else {
            format_date(record.terminated_date.as_deref())
        };

        Self {
            id: record.id,
            employee_num: record.employee_num.clone(),
            period_label: format!("{} - {}", format_date(record.employed_date.as_deref()), end),
            status: if record.is_active() { "Active" } else { "Terminated" }.to_string(),
            created_label: format_date(record.created_at.as_deref()),
        }
    }
}

/// Full detail for a single employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfileView {
    /// The card metrics.
    #[serde(flatten)]
    pub card: EmployeeCardView,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Birth date, e.g. "December 10, 1990".
    pub birth_date_long: String,
    /// Active record start date, e.g. "March 1, 2015".
    pub hired_long: String,
    /// Active record termination date in long form, if terminated.
    pub terminated_long: Option<String>,
    /// When the active record was created.
    pub record_created_label: String,
    /// Every record, most recent start first.
    pub history: Vec<HistoryEntry>,
}

impl EmployeeProfileView {
    /// Derives the profile for `employee` as of `now`.
    pub fn build(employee: &Employee, service_cap_years: u32, now: DateTime<Utc>) -> Self {
        let active = select_active_record(&employee.employment_records);

        Self {
            card: EmployeeCardView::build(employee, service_cap_years, now),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            birth_date_long: format_date_long(employee.birth_date.as_deref()),
            hired_long: format_date_long(active.and_then(|record| record.employed_date.as_deref())),
            terminated_long: active
                .filter(|record| !record.is_active())
                .map(|record| format_date_long(record.terminated_date.as_deref())),
            record_created_label: format_date(
                active.and_then(|record| record.created_at.as_deref()),
            ),
            history: employment_history(&employee.employment_records)
                .into_iter()
                .map(HistoryEntry::from_record)
                .collect(),
        }
    }
}

/// Aggregate figures for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Name of the first employee in source order, or "N/A".
    pub recent_employee: String,
    /// Number of employees.
    pub total_employees: usize,
    /// Earliest start date across all records.
    pub first_hire_date: Option<NaiveDate>,
    /// `first_hire_date` formatted, or "-".
    pub first_hire_label: String,
}

impl DashboardView {
    /// Summarises `employees`.
    pub fn build(employees: &[Employee]) -> Self {
        let first_hire_date = earliest_hire_date(employees);

        Self {
            recent_employee: employees
                .first()
                .map_or_else(|| "N/A".to_string(), Employee::display_name),
            total_employees: employees.len(),
            first_hire_date,
            first_hire_label: first_hire_date
                .map_or_else(|| "-".to_string(), |date| date.format("%b %-d, %Y").to_string()),
        }
    }
}

/// One page of employee cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePage {
    /// 1-based page number.
    pub page: usize,
    /// Cards per page.
    pub page_size: usize,
    /// Number of pages, `ceil(total / page_size)`.
    pub total_pages: usize,
    /// Number of employees across all pages.
    pub total_employees: usize,
    /// The cards on this page.
    pub employees: Vec<EmployeeCardView>,
}

impl EmployeePage {
    /// Builds page `page` (clamped to at least 1) of `employees`.
    ///
    /// Pages past the end are empty. A zero page size is treated as one.
    pub fn build(
        employees: &[Employee],
        page: usize,
        page_size: usize,
        service_cap_years: u32,
        now: DateTime<Utc>,
    ) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let start = (page - 1).saturating_mul(page_size);

        Self {
            page,
            page_size,
            total_pages: employees.len().div_ceil(page_size),
            total_employees: employees.len(),
            employees: employees
                .iter()
                .skip(start)
                .take(page_size)
                .map(|employee| EmployeeCardView::build(employee, service_cap_years, now))
                .collect(),
        }
    }
}
