use std::collections::HashSet;

use termdock_common::EditorView;
use termdock_config::ExemptConfig;

/// Decides whether the terminal panel should be visible for a given set
/// of open editor views.
///
/// The exempt set is fixed at construction; there is no shared mutable
/// settings state.
#[derive(Debug, Clone)]
pub struct VisibilityPolicy {
    exempt: HashSet<String>,
}

impl VisibilityPolicy {
    pub fn new(exempt: impl IntoIterator<Item = String>) -> Self {
        Self {
            exempt: exempt.into_iter().collect(),
        }
    }

    pub fn from_config(config: &ExemptConfig) -> Self {
        Self::new(config.views.iter().cloned())
    }

    /// The terminal should be visible exactly when no real document is
    /// being edited: every view must be exempt. Vacuously true for an
    /// empty snapshot.
    pub fn should_show(&self, views: &[EditorView]) -> bool {
        views.iter().all(|v| self.exempt.contains(&v.identifier))
    }
}
