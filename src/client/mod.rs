//! Employee data source access.
//!
//! [`EmployeeSource`] is the seam between the directory and wherever employee
//! records actually live; [`HttpEmployeeSource`] is the REST implementation.

mod http;
mod source;

pub use http::HttpEmployeeSource;
pub use source::EmployeeSource;
