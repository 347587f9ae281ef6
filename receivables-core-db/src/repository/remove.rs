use async_trait::async_trait;

use super::storage_key::StorageKey;

/// Storage trait for deleting a single entry
#[async_trait]
pub trait RemoveEntry: Send + Sync {
    /// Remove the entry stored under a key. Removing a missing key is not an error.
    async fn remove(&self, key: StorageKey) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
