use async_trait::async_trait;
use receivables_core_db::repository::clear::ClearEntries;
use std::error::Error;
use std::io::ErrorKind;

use super::repo_impl::FileStorage;

#[async_trait]
impl ClearEntries for FileStorage {
    async fn clear(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let _guard = self.lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receivables_core_db::repository::load::LoadEntry;
    use receivables_core_db::repository::storage_key::StorageKey;
    use receivables_core_db::repository::store::StoreEntry;

    #[tokio::test]
    async fn test_clear_removes_file() -> Result<(), Box<dyn Error + Send + Sync>> {
        let dir = tempfile::tempdir()?;
        let storage = FileStorage::new(dir.path().join("session.json"));
        storage.store(StorageKey::UserContext, "{}".to_string()).await?;

        storage.clear().await?;
        storage.clear().await?;

        assert!(!storage.path().exists());
        assert!(storage.load(StorageKey::UserContext).await?.is_none());
        Ok(())
    }
}
