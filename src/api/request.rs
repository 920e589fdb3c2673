//! Request types for the employee directory API.
//!
//! Employee form bodies deserialize straight into
//! [`FormValues`](crate::models::FormValues); this module holds the smaller
//! query and settings shapes.

use serde::{Deserialize, Serialize};

use crate::context::{ThemeMode, UiPreferences};

/// Query string for `GET /employees`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    /// 1-based page number; defaults to the first page.
    #[serde(default)]
    pub page: Option<usize>,
}

impl ListQuery {
    /// The requested page, at least 1.
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }
}

/// Body for `PUT /preferences`. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    /// New theme mode.
    #[serde(default)]
    pub theme_mode: Option<ThemeMode>,
    /// New navigation collapsed flag.
    #[serde(default)]
    pub nav_collapsed: Option<bool>,
}

impl PreferencesUpdate {
    /// Applies the update on top of `current`.
    pub fn apply(&self, current: UiPreferences) -> UiPreferences {
        UiPreferences {
            theme_mode: self.theme_mode.unwrap_or(current.theme_mode),
            nav_collapsed: self.nav_collapsed.unwrap_or(current.nav_collapsed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults_to_first_page() {
        assert_eq!(ListQuery::default().page(), 1);
        assert_eq!(ListQuery { page: Some(0) }.page(), 1);
        assert_eq!(ListQuery { page: Some(4) }.page(), 4);
    }

    #[test]
    fn test_preferences_update_keeps_omitted_fields() {
        let current = UiPreferences {
            theme_mode: ThemeMode::Dark,
            nav_collapsed: false,
        };
        let update: PreferencesUpdate =
            serde_json::from_str(r#"{ "navCollapsed": true }"#).unwrap();

        let updated = update.apply(current);
        assert_eq!(updated.theme_mode, ThemeMode::Dark);
        assert!(updated.nav_collapsed);
    }
}
