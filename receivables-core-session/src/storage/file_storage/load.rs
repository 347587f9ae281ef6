use async_trait::async_trait;
use receivables_core_db::repository::load::LoadEntry;
use receivables_core_db::repository::storage_key::StorageKey;
use std::error::Error;

use super::repo_impl::FileStorage;

impl FileStorage {
    pub(super) async fn load_impl(
        storage: &FileStorage,
        key: StorageKey,
    ) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        let _guard = storage.lock.lock().await;
        let mut entries = storage.read_entries().await?;
        Ok(entries.remove(key.as_str()))
    }
}

#[async_trait]
impl LoadEntry for FileStorage {
    async fn load(&self, key: StorageKey) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        Self::load_impl(self, key).await
    }
}
