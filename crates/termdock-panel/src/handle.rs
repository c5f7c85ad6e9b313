use crate::host::TerminalPanel;

/// Handle to the managed terminal panel. Wraps the host's raw panel and
/// tracks its visibility.
pub struct TerminalHandle<P: TerminalPanel> {
    /// The underlying host panel.
    panel: P,
    /// Current visibility (best-effort tracking of the last call made).
    visible: bool,
}

impl<P: TerminalPanel> TerminalHandle<P> {
    pub(crate) fn new(panel: P) -> Self {
        Self {
            panel,
            visible: false,
        }
    }

    /// Show the panel. Always forwarded to the host, even when the panel
    /// is already visible.
    pub fn show(&mut self) {
        self.panel.show();
        self.visible = true;
    }

    /// Hide the panel. Always forwarded to the host, even when the panel
    /// is already hidden.
    pub fn hide(&mut self) {
        self.panel.hide();
        self.visible = false;
    }

    /// Whether the last call made on the panel was a show.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Release the underlying host panel. Consumes the handle so no
    /// further calls can be made on a disposed panel.
    pub(crate) fn dispose(mut self) {
        self.panel.dispose();
    }

    /// Get a reference to the underlying host panel.
    pub fn inner(&self) -> &P {
        &self.panel
    }
}
