//! The employee data source seam.

use async_trait::async_trait;

use crate::error::DirectoryResult;
use crate::models::{Employee, EmployeePayload, UpdateEmployeePayload};

/// Reads and mutates employee records held by an external data source.
///
/// Each method maps to exactly one request with one terminal outcome; there
/// is no retrying, caching or deduplication behind it. Failures reported by
/// the source surface as transport-class [`DirectoryError`](crate::error::DirectoryError)s.
#[async_trait]
pub trait EmployeeSource: Send + Sync {
    /// Fetches every employee, in the order the source returns them.
    async fn list_employees(&self) -> DirectoryResult<Vec<Employee>>;

    /// Fetches one employee by id.
    async fn get_employee(&self, id: &str) -> DirectoryResult<Employee>;

    /// Creates an employee and returns the stored record.
    async fn create_employee(&self, payload: &EmployeePayload) -> DirectoryResult<Employee>;

    /// Updates an employee and returns the stored record.
    async fn update_employee(
        &self,
        id: &str,
        payload: &UpdateEmployeePayload,
    ) -> DirectoryResult<Employee>;

    /// Deletes an employee.
    async fn delete_employee(&self, id: &str) -> DirectoryResult<()>;
}
