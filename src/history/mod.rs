//! Round history: outcome types, the append-only store, and its collaborators.

pub mod confirm;
pub mod store;
pub mod types;

pub use confirm::{is_affirmative, AssumeYes, Confirmation, StdinConfirmation};
pub use store::{
    FileStore, HistoryStore, KeyValueStore, MemoryStore, CLEAR_PROMPT, DEFAULT_STORAGE_KEY,
};
pub use types::{last_n, HistoryLog, Outcome, RoundOutcome};
