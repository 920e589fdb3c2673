//! Configuration loading and management for the employee directory.
//!
//! This module loads the service configuration from a YAML file: where to
//! listen, where the employee data source lives, presentation settings and
//! validation bounds.
//!
//! # Example
//!
//! ```no_run
//! use employee_directory::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/directory.yaml").unwrap();
//! println!("Page size: {}", loader.config().display.page_size);
//! ```

mod loader;
mod types;

pub use loader::{BASE_URL_ENV, ConfigLoader};
pub use types::{
    DEFAULT_API_BASE_URL, DEFAULT_LISTEN_ADDR, DEFAULT_PAGE_SIZE, DataSourceConfig,
    DirectoryConfig, DisplayConfig, ServerConfig,
};
