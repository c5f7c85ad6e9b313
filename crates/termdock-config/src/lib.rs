//! termdock configuration system.
//!
//! TOML-based configuration with serde defaults and full validation.
//! All sections use sensible defaults so partial configs work out of
//! the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use termdock_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! assert!(config.exempt.views.contains(&"input".to_string()));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ExemptConfig, PanelConfig, TermdockConfig};

use termdock_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<TermdockConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
