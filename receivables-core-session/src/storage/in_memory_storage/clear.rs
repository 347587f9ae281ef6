use async_trait::async_trait;
use receivables_core_db::repository::clear::ClearEntries;
use std::error::Error;

use super::repo_impl::InMemoryStorage;

#[async_trait]
impl ClearEntries for InMemoryStorage {
    async fn clear(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.entries.write().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receivables_core_db::repository::storage_key::StorageKey;

    #[tokio::test]
    async fn test_clear_drops_everything() -> Result<(), Box<dyn Error + Send + Sync>> {
        let storage = InMemoryStorage::with_entries(StorageKey::ALL.map(|key| (key, key.as_str())));
        assert_eq!(storage.len(), StorageKey::ALL.len());

        storage.clear().await?;

        assert!(storage.is_empty());
        Ok(())
    }
}
