//! Configuration types for the employee directory.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so a partial file only overrides what it names.

use std::time::Duration;

use serde::Deserialize;

use crate::derivation::DEFAULT_SERVICE_CAP_YEARS;
use crate::validation::ValidationRules;

/// Default address the HTTP service listens on.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Default base URL of the employee data source.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5131/api";

/// Default number of employee cards per list page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// HTTP service settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. "127.0.0.1:8080".
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

/// Settings for the remote employee data source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataSourceConfig {
    /// Base URL; `/person` is appended for employee resources.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl DataSourceConfig {
    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Settings that only affect how derived data is presented.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// Employee cards per list page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Years of service at which the progress indicator is full.
    #[serde(default = "default_service_cap")]
    pub service_progress_cap_years: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            service_progress_cap_years: default_service_cap(),
        }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DirectoryConfig {
    /// HTTP service settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Data source settings.
    #[serde(default)]
    pub data_source: DataSourceConfig,
    /// Presentation settings.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Form validation bounds.
    #[serde(default)]
    pub validation: ValidationRules,
}

fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_service_cap() -> u32 {
    DEFAULT_SERVICE_CAP_YEARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: DirectoryConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, DirectoryConfig::default());
        assert_eq!(config.display.page_size, 6);
        assert_eq!(config.display.service_progress_cap_years, 10);
        assert_eq!(config.validation.founding_year, 1961);
        assert_eq!(config.data_source.base_url, "http://localhost:5131/api");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let yaml = "display:\n  page_size: 12\n";
        let config: DirectoryConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.display.page_size, 12);
        assert_eq!(config.display.service_progress_cap_years, 10);
        assert_eq!(config.server.listen_addr, DEFAULT_LISTEN_ADDR);
    }

    #[test]
    fn test_timeout_duration() {
        let config = DataSourceConfig {
            timeout_secs: 5,
            ..DataSourceConfig::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }
}
