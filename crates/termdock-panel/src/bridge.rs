//! Lifecycle bridge: owns the terminal panel and drives its visibility
//! from editor lifecycle events.

use tracing::{debug, info};

use termdock_common::{EditorEvent, PanelError, PanelState};
use termdock_config::TermdockConfig;

use crate::handle::TerminalHandle;
use crate::host::EditorHost;
use crate::policy::VisibilityPolicy;

/// Owns the terminal panel for its whole lifetime and re-evaluates the
/// visibility policy on every lifecycle notification.
///
/// Events are delivered serially by the host; each one is handled to
/// completion before the next. After `dispose` the bridge is inert and
/// makes no further calls on the host or the panel.
pub struct PanelBridge<H: EditorHost> {
    host: H,
    /// `None` once disposed.
    handle: Option<TerminalHandle<H::Panel>>,
    policy: VisibilityPolicy,
    state: PanelState,
}

impl<H: EditorHost> PanelBridge<H> {
    /// Create the terminal panel and show it.
    ///
    /// Panel creation is the only fallible step; a failure is returned
    /// to the caller unchanged.
    pub fn new(mut host: H, config: &TermdockConfig) -> Result<Self, PanelError> {
        let panel = host.create_terminal_panel(&config.panel.title)?;
        let mut handle = TerminalHandle::new(panel);
        handle.show();

        info!(title = %config.panel.title, "terminal panel created and shown");

        Ok(Self {
            host,
            handle: Some(handle),
            policy: VisibilityPolicy::from_config(&config.exempt),
            state: PanelState::Shown,
        })
    }

    /// Current state of the two-state machine.
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Whether the owned terminal panel has been released.
    pub fn is_disposed(&self) -> bool {
        self.handle.is_none()
    }

    /// Handle one host lifecycle notification. A no-op after dispose.
    pub fn handle_event(&mut self, event: EditorEvent) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };

        match event {
            EditorEvent::DocumentOpened => {
                // An opened document means real editing has begun; the
                // opened view's own exemption status is not consulted.
                // The host's hide only takes effect cleanly once the
                // panel has been visible, so show first.
                handle.show();
                handle.hide();
                self.state = PanelState::Hidden;
                debug!("document opened, terminal hidden");
            }
            EditorEvent::DocumentClosed => {
                let views = self.host.visible_views();
                if self.policy.should_show(&views) {
                    handle.show();
                    self.state = PanelState::Shown;
                    debug!(views = views.len(), "only exempt views left, terminal shown");
                }
            }
            EditorEvent::Unknown => {}
        }
    }

    /// Release the owned terminal panel. Idempotent; later events are
    /// ignored.
    pub fn dispose(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.dispose();
            info!("terminal panel disposed");
        }
    }
}

impl<H: EditorHost> Drop for PanelBridge<H> {
    fn drop(&mut self) {
        self.dispose();
    }
}
