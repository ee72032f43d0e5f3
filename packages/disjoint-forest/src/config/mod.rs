//! Validator configuration
//!
//! Two ways to configure a [`GraphTreeValidator`](crate::GraphTreeValidator):
//!
//! ```
//! use disjoint_forest::config::{EmptyGraphPolicy, ValidatorConfig};
//!
//! // In code
//! let config = ValidatorConfig::default().empty_graph(EmptyGraphPolicy::Accept);
//! assert!(config.validate().is_ok());
//!
//! // From YAML (schema v1)
//! let config = ValidatorConfig::from_yaml_str("version: 1\nvalidator:\n  max_vertices: 64\n").unwrap();
//! assert_eq!(config.max_vertices, 64);
//! ```
//!
//! `ValidatorConfig::default()` is the plain tree check: an empty graph is
//! not a tree and every endpoint is validated before the first union.

pub mod error;
pub mod io;
pub mod validator_config;

pub use error::{ConfigError, ConfigResult};
pub use io::ConfigExportV1;
pub use validator_config::{EmptyGraphPolicy, ValidatorConfig};
