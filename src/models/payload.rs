//! Outgoing create/update payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body sent to the data source to create an employee.
///
/// Dates are canonical UTC timestamps at the start of the chosen day. A
/// missing termination date is sent as an explicit `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Date of birth.
    pub birth_date: DateTime<Utc>,
    /// Business employee number.
    pub employee_num: String,
    /// Start of employment.
    pub employed_date: DateTime<Utc>,
    /// End of employment, or null.
    pub terminated_date: Option<DateTime<Utc>>,
}

/// Body sent to the data source to update an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeePayload {
    /// The employee being updated.
    pub id: String,
    /// The same fields as a creation.
    #[serde(flatten)]
    pub employee: EmployeePayload,
}

impl UpdateEmployeePayload {
    /// Attaches an employee id to a creation payload.
    pub fn new(id: impl Into<String>, employee: EmployeePayload) -> Self {
        Self {
            id: id.into(),
            employee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_payload(terminated: Option<DateTime<Utc>>) -> EmployeePayload {
        EmployeePayload {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            birth_date: Utc.with_ymd_and_hms(1990, 12, 10, 0, 0, 0).unwrap(),
            employee_num: "AL001".to_string(),
            employed_date: Utc.with_ymd_and_hms(2015, 3, 1, 0, 0, 0).unwrap(),
            terminated_date: terminated,
        }
    }

    #[test]
    fn test_absent_termination_serializes_as_null() {
        let value = serde_json::to_value(create_test_payload(None)).unwrap();
        assert!(value.get("terminatedDate").is_some());
        assert!(value["terminatedDate"].is_null());
    }

    #[test]
    fn test_dates_serialize_as_rfc3339() {
        let value = serde_json::to_value(create_test_payload(None)).unwrap();
        assert_eq!(value["employedDate"], "2015-03-01T00:00:00Z");
        assert_eq!(value["birthDate"], "1990-12-10T00:00:00Z");
    }

    #[test]
    fn test_update_payload_flattens_fields_next_to_id() {
        let terminated = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let payload = UpdateEmployeePayload::new("e1", create_test_payload(Some(terminated)));

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["id"], "e1");
        assert_eq!(value["employeeNum"], "AL001");
        assert_eq!(value["terminatedDate"], "2020-01-01T00:00:00Z");
    }
}
