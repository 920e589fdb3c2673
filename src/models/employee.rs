//! Employee and employment record snapshots.
//!
//! These mirror the records served by the employee data source. Date and
//! timestamp fields are kept as the raw strings the source sent, because the
//! source does not guarantee they are present or well formed; the
//! [`derivation`](crate::derivation) module parses them leniently.

use serde::{Deserialize, Serialize};

/// A single employment stint for an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentRecord {
    /// Identifier assigned by the data source.
    pub id: i64,
    /// Business identifier, uppercase letters and digits (e.g. "EMP001").
    pub employee_num: String,
    /// Start of employment.
    #[serde(default)]
    pub employed_date: Option<String>,
    /// End of employment; absent, null or empty while the stint is current.
    #[serde(default)]
    pub terminated_date: Option<String>,
    /// When the data source created this record.
    #[serde(default)]
    pub created_at: Option<String>,
    /// When the data source last updated this record.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl EmploymentRecord {
    /// Returns true if the record has no termination date.
    ///
    /// An empty termination string counts as absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_directory::models::EmploymentRecord;
    ///
    /// let record = EmploymentRecord {
    ///     id: 1,
    ///     employee_num: "EMP001".to_string(),
    ///     employed_date: Some("2022-01-02".to_string()),
    ///     terminated_date: None,
    ///     created_at: None,
    ///     updated_at: None,
    /// };
    /// assert!(record.is_active());
    /// ```
    pub fn is_active(&self) -> bool {
        self.terminated_date
            .as_deref()
            .is_none_or(|date| date.trim().is_empty())
    }
}

/// An employee as returned by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Opaque identifier assigned by the data source.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Date of birth.
    #[serde(default)]
    pub birth_date: Option<String>,
    /// Employment records in the order the data source returned them.
    #[serde(default, rename = "employees")]
    pub employment_records: Vec<EmploymentRecord>,
    /// When the data source created this employee.
    #[serde(default)]
    pub created_at: Option<String>,
    /// When the data source last updated this employee.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Employee {
    /// Returns "First Last".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(terminated_date: Option<&str>) -> EmploymentRecord {
        EmploymentRecord {
            id: 7,
            employee_num: "EMP007".to_string(),
            employed_date: Some("2020-01-01T00:00:00".to_string()),
            terminated_date: terminated_date.map(str::to_string),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_deserialize_employee_from_source_shape() {
        let json = r#"{
            "id": "3f2a",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "birthDate": "1990-12-10T00:00:00",
            "employees": [
                {
                    "id": 11,
                    "employeeNum": "AL001",
                    "employedDate": "2015-03-01T00:00:00",
                    "terminatedDate": null,
                    "createdAt": "2015-03-01T08:00:00Z",
                    "updatedAt": "2024-05-01T08:00:00Z"
                }
            ],
            "createdAt": "2015-03-01T08:00:00Z",
            "updatedAt": "2024-05-01T08:00:00Z"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "3f2a");
        assert_eq!(employee.display_name(), "Ada Lovelace");
        assert_eq!(employee.employment_records.len(), 1);
        assert_eq!(employee.employment_records[0].employee_num, "AL001");
        assert!(employee.employment_records[0].terminated_date.is_none());
    }

    #[test]
    fn test_deserialize_tolerates_missing_optional_fields() {
        let json = r#"{ "id": "x", "firstName": "Bo", "lastName": "Li" }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert!(employee.birth_date.is_none());
        assert!(employee.employment_records.is_empty());
        assert!(employee.created_at.is_none());
    }

    #[test]
    fn test_serialize_uses_source_field_names() {
        let employee = Employee {
            id: "e1".to_string(),
            first_name: "Bo".to_string(),
            last_name: "Li".to_string(),
            birth_date: None,
            employment_records: vec![create_test_record(None)],
            created_at: None,
            updated_at: None,
        };

        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(value["firstName"], "Bo");
        assert_eq!(value["employees"][0]["employeeNum"], "EMP007");
    }

    #[test]
    fn test_is_active_without_termination() {
        assert!(create_test_record(None).is_active());
    }

    #[test]
    fn test_is_active_with_empty_termination() {
        assert!(create_test_record(Some("")).is_active());
    }

    #[test]
    fn test_is_not_active_with_termination() {
        assert!(!create_test_record(Some("2022-01-01")).is_active());
    }
}
