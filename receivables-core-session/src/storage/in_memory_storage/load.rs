use async_trait::async_trait;
use receivables_core_db::repository::load::LoadEntry;
use receivables_core_db::repository::storage_key::StorageKey;
use std::error::Error;

use super::repo_impl::InMemoryStorage;

impl InMemoryStorage {
    pub(super) fn load_impl(storage: &InMemoryStorage, key: StorageKey) -> Option<String> {
        storage.entries.read().get(&key).cloned()
    }
}

#[async_trait]
impl LoadEntry for InMemoryStorage {
    async fn load(&self, key: StorageKey) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        Ok(Self::load_impl(self, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_missing_and_present() -> Result<(), Box<dyn Error + Send + Sync>> {
        let storage = InMemoryStorage::with_entries([(StorageKey::IsLoggedIn, "true")]);

        assert_eq!(storage.load(StorageKey::IsLoggedIn).await?.as_deref(), Some("true"));
        assert!(storage.load(StorageKey::SignupUserId).await?.is_none());

        Ok(())
    }
}
