//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{DirectoryError, DirectoryResult};

use super::types::DirectoryConfig;

/// Environment variable that overrides `data_source.base_url`.
pub const BASE_URL_ENV: &str = "DIRECTORY_API_BASE_URL";

/// Loads and provides access to the service configuration.
///
/// # Example
///
/// ```no_run
/// use employee_directory::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/directory.yaml")?;
/// println!("Data source: {}", loader.config().data_source.base_url);
/// # Ok::<(), employee_directory::error::DirectoryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: DirectoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// After parsing, a non-empty [`BASE_URL_ENV`] environment variable
    /// replaces the configured data source URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not valid YAML for [`DirectoryConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> DirectoryResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| DirectoryError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml(&content).map_err(|e| match e {
            DirectoryError::ConfigParseError { message, .. } => DirectoryError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(path = %path_str, "Loaded configuration");
        Ok(loader.with_base_url_override(std::env::var(BASE_URL_ENV).ok()))
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml(content: &str) -> DirectoryResult<Self> {
        let config = serde_yaml::from_str::<DirectoryConfig>(content).map_err(|e| {
            DirectoryError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: DirectoryConfig) -> Self {
        Self { config }
    }

    /// Replaces the data source URL when `base_url` is set and non-empty.
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url.filter(|url| !url.trim().is_empty()) {
            debug!(base_url = %base_url, "Overriding data source base URL");
            self.config.data_source.base_url = base_url;
        }
        self
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> DirectoryConfig {
        self.config
    }
}
