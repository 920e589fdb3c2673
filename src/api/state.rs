//! Application state for the employee directory API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::client::EmployeeSource;
use crate::config::DirectoryConfig;
use crate::context::{PreferenceStore, SelectedEmployee};

/// Shared application state.
///
/// Owns the configuration, the employee data source, and the explicit view
/// context (selected employee and UI preferences).
#[derive(Clone)]
pub struct AppState {
    config: Arc<DirectoryConfig>,
    source: Arc<dyn EmployeeSource>,
    selection: Arc<SelectedEmployee>,
    preferences: Arc<PreferenceStore>,
}

impl AppState {
    /// Creates a new application state around `source`.
    pub fn new<S>(config: DirectoryConfig, source: S) -> Self
    where
        S: EmployeeSource + 'static,
    {
        Self::with_source(config, Arc::new(source))
    }

    /// Creates a new application state around a shared source.
    pub fn with_source(config: DirectoryConfig, source: Arc<dyn EmployeeSource>) -> Self {
        Self {
            config: Arc::new(config),
            source,
            selection: Arc::new(SelectedEmployee::new()),
            preferences: Arc::new(PreferenceStore::default()),
        }
    }

    /// Returns the service configuration.
    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Returns the employee data source.
    pub fn source(&self) -> &dyn EmployeeSource {
        self.source.as_ref()
    }

    /// Returns the selected-employee holder.
    pub fn selection(&self) -> &SelectedEmployee {
        &self.selection
    }

    /// Returns the UI preference store.
    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }
}
