use async_trait::async_trait;

use super::storage_key::StorageKey;

/// Storage trait for reading a single raw entry
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl LoadEntry for InMemoryStorage {
///     async fn load(&self, key: StorageKey) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait LoadEntry: Send + Sync {
    /// Read the raw value stored under a key
    ///
    /// # Returns
    /// * `Ok(Some(String))` - The stored value
    /// * `Ok(None)` - Nothing is stored under the key
    /// * `Err` - The backing store could not be read
    async fn load(
        &self,
        key: StorageKey,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>>;
}
