//! Explicit view state shared between handlers.
//!
//! The directory keeps two pieces of cross-view state: which employee was
//! last opened (so the edit view can reuse the snapshot the profile view
//! loaded) and UI preferences. Each has a single owner with explicit setters
//! and is handed to handlers through [`AppState`](crate::api::AppState);
//! nothing here is a global.

use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Holds the currently selected employee. Last write wins.
#[derive(Debug, Default)]
pub struct SelectedEmployee {
    current: RwLock<Option<Employee>>,
}

impl SelectedEmployee {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection.
    pub fn set(&self, employee: Employee) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(employee);
    }

    /// A copy of the selected employee, if any.
    pub fn get(&self) -> Option<Employee> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The selected employee if its id is `id`.
    pub fn get_if(&self, id: &str) -> Option<Employee> {
        self.get().filter(|employee| employee.id == id)
    }

    /// Clears the selection.
    pub fn clear(&self) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Clears the selection only if it holds the employee with `id`.
    pub fn clear_if(&self, id: &str) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if current.as_ref().is_some_and(|employee| employee.id == id) {
            *current = None;
        }
    }
}

/// Light or dark colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    /// Light scheme.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl ThemeMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Presentation preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiPreferences {
    /// Active colour scheme.
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Whether the navigation sidebar is collapsed.
    #[serde(default)]
    pub nav_collapsed: bool,
}

/// Owner of the [`UiPreferences`].
#[derive(Debug, Default)]
pub struct PreferenceStore {
    current: RwLock<UiPreferences>,
}

impl PreferenceStore {
    /// The current preferences.
    pub fn get(&self) -> UiPreferences {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the preferences, returning the new value.
    pub fn set(&self, preferences: UiPreferences) -> UiPreferences {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = preferences;
        preferences
    }

    /// Applies `change` under a single write lock, returning the new
    /// preferences. Concurrent updates to different fields never overwrite
    /// each other.
    pub fn update<F>(&self, change: F) -> UiPreferences
    where
        F: FnOnce(&mut UiPreferences),
    {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        change(&mut current);
        *current
    }

    /// Flips the theme mode, returning the new preferences.
    pub fn toggle_theme(&self) -> UiPreferences {
        self.update(|preferences| preferences.theme_mode = preferences.theme_mode.toggled())
    }
}
