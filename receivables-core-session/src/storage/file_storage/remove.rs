use async_trait::async_trait;
use receivables_core_db::repository::remove::RemoveEntry;
use receivables_core_db::repository::storage_key::StorageKey;
use std::error::Error;

use super::repo_impl::FileStorage;

#[async_trait]
impl RemoveEntry for FileStorage {
    async fn remove(&self, key: StorageKey) -> Result<(), Box<dyn Error + Send + Sync>> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.remove(key.as_str()).is_some() {
            self.write_entries(&entries).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receivables_core_db::repository::load::LoadEntry;
    use receivables_core_db::repository::store::StoreEntry;

    #[tokio::test]
    async fn test_remove_single_key() -> Result<(), Box<dyn Error + Send + Sync>> {
        let dir = tempfile::tempdir()?;
        let storage = FileStorage::new(dir.path().join("session.json"));
        storage.store(StorageKey::EditingCustomer, "{}".to_string()).await?;
        storage.store(StorageKey::OriginalCustomer, "{}".to_string()).await?;

        storage.remove(StorageKey::EditingCustomer).await?;
        storage.remove(StorageKey::SelectedCompanyId).await?;

        assert!(storage.load(StorageKey::EditingCustomer).await?.is_none());
        assert!(storage.load(StorageKey::OriginalCustomer).await?.is_some());
        Ok(())
    }
}
