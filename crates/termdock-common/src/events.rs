use serde::{Deserialize, Serialize};

/// Editor lifecycle notifications delivered by the host.
///
/// The host emits these serially, in emission order. No payload is
/// carried: the bridge re-reads the full visible-views snapshot on every
/// evaluation instead of patching state incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum EditorEvent {
    DocumentOpened,
    DocumentClosed,
    #[serde(other)]
    Unknown,
}
