//! Core data models for the employee directory.
//!
//! This module contains the snapshots read from the data source, the
//! transient form input, and the payloads sent back.

mod api_result;
mod employee;
mod form;
mod payload;

pub use api_result::{ApiEnvelope, ApiResponse};
pub use employee::{Employee, EmploymentRecord};
pub use form::{FormField, FormValues};
pub use payload::{EmployeePayload, UpdateEmployeePayload};
