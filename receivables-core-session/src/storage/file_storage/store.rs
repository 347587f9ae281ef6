use async_trait::async_trait;
use receivables_core_db::repository::storage_key::StorageKey;
use receivables_core_db::repository::store::StoreEntry;
use std::error::Error;

use super::repo_impl::FileStorage;

impl FileStorage {
    pub(super) async fn store_impl(
        storage: &FileStorage,
        key: StorageKey,
        value: String,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let _guard = storage.lock.lock().await;
        let mut entries = storage.read_entries().await?;
        entries.insert(key.as_str().to_string(), value);
        storage.write_entries(&entries).await
    }
}

#[async_trait]
impl StoreEntry for FileStorage {
    async fn store(&self, key: StorageKey, value: String) -> Result<(), Box<dyn Error + Send + Sync>> {
        Self::store_impl(self, key, value).await
    }
}
