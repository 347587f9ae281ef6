use async_trait::async_trait;
use receivables_core_db::repository::storage_key::StorageKey;
use receivables_core_db::repository::store::StoreEntry;
use std::error::Error;

use super::repo_impl::InMemoryStorage;

#[async_trait]
impl StoreEntry for InMemoryStorage {
    async fn store(&self, key: StorageKey, value: String) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.entries.write().insert(key, value);
        Ok(())
    }
}
