//! Employee form input.
//!
//! [`FormValues`] is what an add/edit form holds while the user types. It is
//! never persisted; it is validated by [`crate::validation`] and, once clean,
//! normalized into an [`EmployeePayload`](super::EmployeePayload).

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::derivation::parse_calendar_date;

use super::employee::Employee;

/// Identifies a single input on the employee form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
    /// Date of birth.
    BirthDate,
    /// Business employee number.
    EmployeeNum,
    /// Start of employment.
    EmployedDate,
    /// End of employment.
    TerminatedDate,
}

impl FormField {
    /// Every field, in form order.
    pub const ALL: [FormField; 6] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::BirthDate,
        FormField::EmployeeNum,
        FormField::EmployedDate,
        FormField::TerminatedDate,
    ];

    /// The wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::BirthDate => "birthDate",
            FormField::EmployeeNum => "employeeNum",
            FormField::EmployedDate => "employedDate",
            FormField::TerminatedDate => "terminatedDate",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The current contents of the employee form.
///
/// Date inputs accept any format [`parse_calendar_date`] understands; a value
/// that cannot be parsed is held as `None`, exactly like an empty input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Date of birth.
    #[serde(default, deserialize_with = "lenient_date")]
    pub birth_date: Option<NaiveDate>,
    /// Business employee number.
    #[serde(default)]
    pub employee_num: String,
    /// Start of employment.
    #[serde(default, deserialize_with = "lenient_date")]
    pub employed_date: Option<NaiveDate>,
    /// End of employment, if any.
    #[serde(default, deserialize_with = "lenient_date")]
    pub terminated_date: Option<NaiveDate>,
}

impl FormValues {
    /// Prefills an edit form from an existing employee.
    ///
    /// Employment fields come from the employee's active record; when the
    /// employee has no records they are left blank.
    pub fn from_employee(employee: &Employee) -> Self {
        let active = crate::derivation::select_active_record(&employee.employment_records);

        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            birth_date: employee.birth_date.as_deref().and_then(parse_calendar_date),
            employee_num: active
                .map(|record| record.employee_num.clone())
                .unwrap_or_default(),
            employed_date: active
                .and_then(|record| record.employed_date.as_deref())
                .and_then(parse_calendar_date),
            terminated_date: active
                .and_then(|record| record.terminated_date.as_deref())
                .and_then(parse_calendar_date),
        }
    }
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_calendar_date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmploymentRecord;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_deserialize_accepts_iso_timestamps_and_plain_dates() {
        let json = r#"{
            "firstName": "Ada",
            "lastName": "Lovelace",
            "birthDate": "1990-12-10T00:00:00.000Z",
            "employeeNum": "AL001",
            "employedDate": "2015-03-01",
            "terminatedDate": null
        }"#;

        let values: FormValues = serde_json::from_str(json).unwrap();
        assert_eq!(values.birth_date, Some(date(1990, 12, 10)));
        assert_eq!(values.employed_date, Some(date(2015, 3, 1)));
        assert_eq!(values.terminated_date, None);
    }

    #[test]
    fn test_deserialize_unparsable_date_becomes_none() {
        let json = r#"{ "birthDate": "not a date", "employedDate": "" }"#;

        let values: FormValues = serde_json::from_str(json).unwrap();
        assert_eq!(values.birth_date, None);
        assert_eq!(values.employed_date, None);
        assert!(values.first_name.is_empty());
    }

    #[test]
    fn test_from_employee_prefills_from_active_record() {
        let employee = Employee {
            id: "e1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            birth_date: Some("1990-12-10T00:00:00".to_string()),
            employment_records: vec![
                EmploymentRecord {
                    id: 1,
                    employee_num: "OLD01".to_string(),
                    employed_date: Some("2010-01-01".to_string()),
                    terminated_date: Some("2012-01-01".to_string()),
                    created_at: None,
                    updated_at: None,
                },
                EmploymentRecord {
                    id: 2,
                    employee_num: "NEW02".to_string(),
                    employed_date: Some("2013-05-06".to_string()),
                    terminated_date: None,
                    created_at: None,
                    updated_at: None,
                },
            ],
            created_at: None,
            updated_at: None,
        };

        let values = FormValues::from_employee(&employee);
        assert_eq!(values.first_name, "Ada");
        assert_eq!(values.birth_date, Some(date(1990, 12, 10)));
        assert_eq!(values.employee_num, "NEW02");
        assert_eq!(values.employed_date, Some(date(2013, 5, 6)));
        assert_eq!(values.terminated_date, None);
    }

    #[test]
    fn test_from_employee_without_records_leaves_employment_blank() {
        let employee = Employee {
            id: "e2".to_string(),
            first_name: "Bo".to_string(),
            last_name: "Li".to_string(),
            birth_date: None,
            employment_records: vec![],
            created_at: None,
            updated_at: None,
        };

        let values = FormValues::from_employee(&employee);
        assert!(values.employee_num.is_empty());
        assert_eq!(values.employed_date, None);
    }

    #[test]
    fn test_form_field_wire_names() {
        assert_eq!(
            serde_json::to_string(&FormField::EmployeeNum).unwrap(),
            "\"employeeNum\""
        );
        assert_eq!(FormField::TerminatedDate.to_string(), "terminatedDate");
    }
}
