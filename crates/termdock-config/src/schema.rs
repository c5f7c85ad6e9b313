//! Configuration schema types for termdock.
//!
//! All structs use `serde(default)` so partial configs work correctly.

use serde::{Deserialize, Serialize};

// =============================================================================
// TYPES
// =============================================================================

/// Root configuration for termdock.
///
/// Only override what you want to change; missing fields use defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct TermdockConfig {
    pub exempt: ExemptConfig,
    pub panel: PanelConfig,
}

/// View identifiers that do not count as real document editing.
///
/// A view whose identifier appears here (e.g. an input box) does not
/// force the terminal panel to stay hidden.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExemptConfig {
    pub views: Vec<String>,
}

/// Settings for the managed terminal panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub title: String,
}

// =============================================================================
// DEFAULTS
// =============================================================================

impl Default for ExemptConfig {
    fn default() -> Self {
        Self {
            views: vec!["input".to_string()],
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: "Terminal".to_string(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
