//! Name and employee number rules.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum length of a first or last name.
pub const NAME_MIN_LENGTH: usize = 2;

/// Minimum length of an employee number.
pub const EMPLOYEE_NUM_MIN_LENGTH: usize = 3;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("Invalid name pattern"));

static EMPLOYEE_NUM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]+$").expect("Invalid employee number pattern"));

/// Checks a first or last name.
///
/// `label` is the human name of the field ("First name", "Last name") and
/// prefixes the message. Length is checked before the character set, so a
/// value violating both reports the length rule.
pub fn check_name(label: &str, value: &str) -> Option<String> {
    if value.chars().count() < NAME_MIN_LENGTH {
        return Some(format!(
            "{} must be at least {} characters",
            label, NAME_MIN_LENGTH
        ));
    }
    if !NAME_PATTERN.is_match(value) {
        return Some(format!("{} can only contain letters and spaces", label));
    }
    None
}

/// Checks an employee number: at least three characters, uppercase ASCII
/// letters and digits only.
pub fn check_employee_num(value: &str) -> Option<String> {
    if value.chars().count() < EMPLOYEE_NUM_MIN_LENGTH {
        return Some(format!(
            "Employee number must be at least {} characters",
            EMPLOYEE_NUM_MIN_LENGTH
        ));
    }
    if !EMPLOYEE_NUM_PATTERN.is_match(value) {
        return Some("Employee number can only contain uppercase letters and numbers".to_string());
    }
    None
}
