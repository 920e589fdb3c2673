//! HTTP API module for the employee directory.
//!
//! This module provides the REST endpoints presentation code consumes:
//! employee lists, profiles and the dashboard with derived metrics already
//! computed, an eager validation endpoint, and create/update/delete that
//! validate before calling the data source.

mod handlers;
mod request;
mod response;
mod state;
mod views;

pub use handlers::create_router;
pub use request::{ListQuery, PreferencesUpdate};
pub use response::{ApiError, ApiErrorResponse, ValidationReport};
pub use state::AppState;
pub use views::{DashboardView, EmployeeCardView, EmployeePage, EmployeeProfileView, HistoryEntry};
