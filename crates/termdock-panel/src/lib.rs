//! Terminal panel visibility control for editor hosts.
//!
//! Keeps an auxiliary terminal panel visible whenever no real document
//! editor is open, and hides it as soon as one opens. Provides:
//! - `VisibilityPolicy`: pure decision from the visible editor views
//! - `PanelBridge`: owns the terminal handle and drives it from host
//!   lifecycle events
//! - `EditorHost` / `TerminalPanel`: the traits the embedding editor
//!   implements

pub mod bridge;
pub mod handle;
pub mod host;
pub mod policy;

pub use bridge::PanelBridge;
pub use handle::TerminalHandle;
pub use host::{EditorHost, TerminalPanel};
pub use policy::VisibilityPolicy;
