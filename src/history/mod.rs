//! Calculation history: entries and the persisted, capped store.

mod entry;
mod store;

pub use entry::HistoryEntry;
pub use store::{DEFAULT_HISTORY_LIMIT, HISTORY_KEY, HistoryStore};
