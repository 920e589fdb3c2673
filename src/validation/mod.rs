//! Employee form validation.
//!
//! Validation is a pure function of the current [`FormValues`], meant to be
//! re-run on every edit. [`validate_field`] checks one input (cross-field
//! rules read the other values they depend on), [`validate_form`] checks all
//! of them, and [`prepare_submission`] turns a clean form into an
//! [`EmployeePayload`]. Failures are reported per field and never raised; the
//! caller decides whether to block submission.
//!
//! # Example
//!
//! ```
//! use employee_directory::models::{FormField, FormValues};
//! use employee_directory::validation::{ValidationRules, validate_form_at};
//! use chrono::NaiveDate;
//!
//! let values = FormValues {
//!     first_name: "A1".to_string(),
//!     last_name: "Lovelace".to_string(),
//!     birth_date: NaiveDate::from_ymd_opt(1990, 12, 10),
//!     employee_num: "ab1".to_string(),
//!     employed_date: NaiveDate::from_ymd_opt(2015, 3, 1),
//!     terminated_date: None,
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
//! let errors = validate_form_at(&values, &ValidationRules::default(), today);
//!
//! assert_eq!(errors.len(), 2);
//! assert!(errors.get(FormField::FirstName).is_some());
//! assert!(errors.get(FormField::EmployeeNum).is_some());
//! ```

mod dates;
mod names;

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{EmployeePayload, FormField, FormValues};

pub use dates::{check_birth_date, check_employed_date, check_terminated_date};
pub use names::{EMPLOYEE_NUM_MIN_LENGTH, NAME_MIN_LENGTH, check_employee_num, check_name};

/// The year the organisation was founded; no employment can start earlier.
pub const COMPANY_FOUNDING_YEAR: i32 = 1961;

/// Tunable validation bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    /// Employment start dates before January 1st of this year are rejected.
    #[serde(default = "default_founding_year")]
    pub founding_year: i32,
}

fn default_founding_year() -> i32 {
    COMPANY_FOUNDING_YEAR
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            founding_year: COMPANY_FOUNDING_YEAR,
        }
    }
}

/// Per-field error messages. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FormField, String>);

impl ValidationErrors {
    /// Records a message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// The message for `field`, if it failed.
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Returns true when no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failed fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failed fields and their messages, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Checks a single field against today's date.
pub fn validate_field(
    field: FormField,
    values: &FormValues,
    rules: &ValidationRules,
) -> Option<String> {
    validate_field_at(field, values, rules, Utc::now().date_naive())
}

/// [`validate_field`] evaluated against a fixed `today`.
pub fn validate_field_at(
    field: FormField,
    values: &FormValues,
    rules: &ValidationRules,
    today: NaiveDate,
) -> Option<String> {
    match field {
        FormField::FirstName => check_name("First name", &values.first_name),
        FormField::LastName => check_name("Last name", &values.last_name),
        FormField::EmployeeNum => check_employee_num(&values.employee_num),
        FormField::BirthDate => check_birth_date(values.birth_date, today),
        FormField::EmployedDate => {
            check_employed_date(values.employed_date, today, rules.founding_year)
        }
        FormField::TerminatedDate => {
            check_terminated_date(values.terminated_date, values.employed_date, today)
        }
    }
}

/// Checks every field against today's date.
pub fn validate_form(values: &FormValues, rules: &ValidationRules) -> ValidationErrors {
    validate_form_at(values, rules, Utc::now().date_naive())
}

/// [`validate_form`] evaluated against a fixed `today`.
pub fn validate_form_at(
    values: &FormValues,
    rules: &ValidationRules,
    today: NaiveDate,
) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for field in FormField::ALL {
        if let Some(message) = validate_field_at(field, values, rules, today) {
            errors.insert(field, message);
        }
    }
    errors
}

/// Validates the form and, if clean, builds the creation payload.
pub fn prepare_submission(
    values: &FormValues,
    rules: &ValidationRules,
) -> Result<EmployeePayload, ValidationErrors> {
    prepare_submission_at(values, rules, Utc::now().date_naive())
}

/// [`prepare_submission`] evaluated against a fixed `today`.
///
/// Dates become UTC midnight timestamps. An empty termination date stays
/// `None` and is sent as `null`.
pub fn prepare_submission_at(
    values: &FormValues,
    rules: &ValidationRules,
    today: NaiveDate,
) -> Result<EmployeePayload, ValidationErrors> {
    let errors = validate_form_at(values, rules, today);

    match (values.birth_date, values.employed_date) {
        (Some(birth_date), Some(employed_date)) if errors.is_empty() => Ok(EmployeePayload {
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            birth_date: start_of_day(birth_date),
            employee_num: values.employee_num.clone(),
            employed_date: start_of_day(employed_date),
            terminated_date: values.terminated_date.map(start_of_day),
        }),
        _ => Err(errors),
    }
}

fn start_of_day(date: NaiveDate) -> chrono::DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
