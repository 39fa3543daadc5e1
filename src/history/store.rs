//! Persisted history store, newest first.

use super::HistoryEntry;
use crate::storage::{KeyValueStore, StorageError};
use tracing::{debug, info, warn};

/// Storage key holding the JSON array of entries.
pub const HISTORY_KEY: &str = "calculatorHistory";

/// Maximum number of entries kept. A configured limit can lower it, never raise it.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Ordered calculation history backed by a key-value store.
///
/// Every mutation is written through before it becomes visible. A failed
/// write leaves the in-memory list unchanged, so a reload sees the same
/// entries as `list`.
#[derive(Debug)]
pub struct HistoryStore<S: KeyValueStore> {
    storage: S,
    entries: Vec<HistoryEntry>,
    limit: usize,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Load history from `storage` with the default cap.
    pub fn load(storage: S) -> Result<Self, StorageError> {
        Self::load_with_limit(storage, DEFAULT_HISTORY_LIMIT)
    }

    /// Load history from `storage`, keeping at most `limit` entries.
    /// `limit` is clamped to [`DEFAULT_HISTORY_LIMIT`].
    ///
    /// A missing key yields an empty history. Unreadable JSON is logged and
    /// treated as empty rather than failing startup.
    pub fn load_with_limit(storage: S, limit: usize) -> Result<Self, StorageError> {
        if limit > DEFAULT_HISTORY_LIMIT {
            warn!(limit, max = DEFAULT_HISTORY_LIMIT, "history limit too large, clamping");
        }
        let limit = limit.min(DEFAULT_HISTORY_LIMIT);
        let mut entries = match storage.get(HISTORY_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(error = %e, "discarding unreadable calculation history");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        entries.truncate(limit);
        debug!(count = entries.len(), "loaded calculation history");

        Ok(Self {
            storage,
            entries,
            limit,
        })
    }

    /// Entries, newest first.
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Insert at the front, drop the oldest entries past the cap, and persist.
    pub fn append(&mut self, entry: HistoryEntry) -> Result<(), StorageError> {
        debug!(equation = %entry.equation, result = %entry.result, "recording calculation");
        let entries = std::iter::once(entry)
            .chain(self.entries.iter().cloned())
            .take(self.limit)
            .collect();
        self.commit(entries)
    }

    /// Remove every entry matching `predicate`. Returns how many were removed.
    pub fn remove<F>(&mut self, mut predicate: F) -> Result<usize, StorageError>
    where
        F: FnMut(&HistoryEntry) -> bool,
    {
        let kept: Vec<HistoryEntry> = self
            .entries
            .iter()
            .filter(|entry| !predicate(*entry))
            .cloned()
            .collect();
        let removed = self.entries.len() - kept.len();
        if removed > 0 {
            self.commit(kept)?;
        }
        Ok(removed)
    }

    /// Remove the entry at `index` (0 is the newest).
    pub fn remove_at(&mut self, index: usize) -> Result<Option<HistoryEntry>, StorageError> {
        if index >= self.entries.len() {
            return Ok(None);
        }
        let mut entries = self.entries.clone();
        let entry = entries.remove(index);
        self.commit(entries)?;
        Ok(Some(entry))
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        info!(count = self.entries.len(), "clearing calculation history");
        self.commit(Vec::new())
    }

    /// Write `entries` to storage, then make them the current list.
    fn commit(&mut self, entries: Vec<HistoryEntry>) -> Result<(), StorageError> {
        let json = serde_json::to_string(&entries)?;
        self.storage.set(HISTORY_KEY, &json)?;
        self.entries = entries;
        Ok(())
    }
}
