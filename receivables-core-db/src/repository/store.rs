use async_trait::async_trait;

use super::storage_key::StorageKey;

/// Storage trait for writing a single raw entry, replacing any previous value
#[async_trait]
pub trait StoreEntry: Send + Sync {
    /// Write a value under a key
    ///
    /// # Arguments
    /// * `key` - The entry to write
    /// * `value` - Raw value, usually JSON text
    async fn store(
        &self,
        key: StorageKey,
        value: String,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
