use async_trait::async_trait;
use receivables_core_db::repository::remove::RemoveEntry;
use receivables_core_db::repository::storage_key::StorageKey;
use std::error::Error;

use super::repo_impl::InMemoryStorage;

#[async_trait]
impl RemoveEntry for InMemoryStorage {
    async fn remove(&self, key: StorageKey) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.entries.write().remove(&key);
        Ok(())
    }
}
