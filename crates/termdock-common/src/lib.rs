pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, PanelError, TermdockError};
pub use events::EditorEvent;
pub use types::{EditorView, PanelState};

pub type Result<T> = std::result::Result<T, TermdockError>;
