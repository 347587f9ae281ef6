use parking_lot::RwLock;
use receivables_core_db::repository::storage_key::StorageKey;
use std::collections::HashMap;

/// Session storage living for the lifetime of the process
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    pub(super) entries: RwLock<HashMap<StorageKey, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated storage, as left behind by an earlier page load
    pub fn with_entries<I, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (StorageKey, V)>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn contains(&self, key: StorageKey) -> bool {
        self.entries.read().contains_key(&key)
    }
}
