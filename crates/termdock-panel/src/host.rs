//! Traits implemented by the embedding editor.

use termdock_common::{EditorView, PanelError};

/// Host primitive for one auxiliary terminal panel.
///
/// Show and hide carry no error surface: the widget either complies or
/// the call is a no-op. Both must be idempotent; callers do not
/// short-circuit redundant calls.
pub trait TerminalPanel {
    fn show(&mut self);
    fn hide(&mut self);

    /// Release the underlying widget. Called at most once.
    fn dispose(&mut self);
}

/// The embedding editor host.
///
/// Provides terminal panel creation and the visible-views snapshot the
/// policy evaluates. All calls are synchronous and made from the host's
/// own event dispatch.
pub trait EditorHost {
    type Panel: TerminalPanel;

    /// Create the auxiliary terminal panel. Called once per bridge;
    /// failure propagates to the bridge's caller unchanged.
    fn create_terminal_panel(&mut self, title: &str) -> Result<Self::Panel, PanelError>;

    /// Snapshot of the currently visible editor views. An empty snapshot
    /// means no editing surface is open at all.
    fn visible_views(&self) -> Vec<EditorView>;
}
