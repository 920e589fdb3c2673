//! Derived employee metrics.
//!
//! Everything here is a pure function of an [`Employee`](crate::models::Employee)
//! or [`EmploymentRecord`](crate::models::EmploymentRecord) snapshot and, where
//! time matters, the current instant. Each time-dependent function has an
//! `_at` variant taking the instant explicitly. Missing or malformed upstream
//! data degrades to zero or a sentinel label; nothing in this module fails.

mod active_record;
mod dates;
mod hire_date;
mod relative_time;
mod service_progress;
mod tenure;

pub use active_record::select_active_record;
pub use dates::{
    UNKNOWN_LABEL, format_date, format_date_long, parse_calendar_date, parse_timestamp,
    whole_years_between,
};
pub use hire_date::{earliest_hire_date, employment_history};
pub use relative_time::{
    days_since_update, days_since_update_at, relative_label, relative_update_label,
    relative_update_label_at,
};
pub use service_progress::{
    DEFAULT_SERVICE_CAP_YEARS, service_progress_percent, service_progress_ratio,
};
pub use tenure::{age, age_at, years_of_service, years_of_service_at};
