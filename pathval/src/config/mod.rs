//! Configuration for the OS-backed filesystem capability.
//!
//! This module provides layered configuration with support for:
//! - A YAML configuration file (`~/.pathval/config.yaml` or an explicit path)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHVAL_*`)
//! 3. Configuration file
//! 4. Built-in defaults (separator `/`, case sensitivity detected, home and
//!    current directory read from the process)
//!
//! # Examples
//!
//! ```no_run
//! use pathval::config::ConfigBuilder;
//! use pathval::PathValue;
//!
//! let fs = ConfigBuilder::new().build_file_system().unwrap();
//! let path = PathValue::new("~/projects/../notes.txt").normalized(&fs);
//! println!("{path}");
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use pathval::config::{ConfigBuilder, FileSystemConfig};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(FileSystemConfig {
//!         case_sensitive: Some(false),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.case_sensitive, Some(false));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use merger::ConfigMerger;
pub use schema::FileSystemConfig;
pub use validator::ConfigValidator;
