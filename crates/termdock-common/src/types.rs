use serde::{Deserialize, Serialize};
use std::fmt;

/// One currently visible editor view, as reported by the host.
///
/// The identifier is a file path for document editors, or a synthetic
/// name (e.g. `"input"`) for non-document surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorView {
    pub identifier: String,
}

impl EditorView {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl fmt::Display for EditorView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)
    }
}

/// Visibility state of the managed terminal panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelState {
    Shown,
    Hidden,
}
