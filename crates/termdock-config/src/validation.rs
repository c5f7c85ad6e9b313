//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

use crate::schema::TermdockConfig;
use std::collections::HashSet;
use termdock_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TermdockConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_exempt(&mut errors, config);
    validate_panel(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_exempt(errors: &mut Vec<String>, config: &TermdockConfig) {
    let mut seen = HashSet::new();
    for name in &config.exempt.views {
        if name.trim().is_empty() {
            errors.push("exempt.views: view name must not be empty".to_string());
        } else if !seen.insert(name.as_str()) {
            errors.push(format!("exempt.views: duplicate view name '{name}'"));
        }
    }
}

fn validate_panel(errors: &mut Vec<String>, config: &TermdockConfig) {
    if config.panel.title.trim().is_empty() {
        errors.push("panel.title: must not be empty".to_string());
    }
}
