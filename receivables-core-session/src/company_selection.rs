use receivables_core_db::repository::session_storage::SessionStorage;
use receivables_core_db::repository::storage_key::StorageKey;
use std::sync::Arc;
use tokio::sync::watch;

use crate::error::SessionResult;

/// Company the user is currently working in, persisted under `selectedCompanyId`
pub struct CompanySelection {
    storage: Arc<dyn SessionStorage>,
    selected: watch::Sender<Option<i64>>,
}

impl CompanySelection {
    /// Start from the persisted selection; an unparsable value counts as none
    pub async fn load(storage: Arc<dyn SessionStorage>) -> SessionResult<Self> {
        let initial = storage
            .load(StorageKey::SelectedCompanyId)
            .await?
            .and_then(|raw| raw.trim().parse::<i64>().ok());
        let (selected, _) = watch::channel(initial);
        Ok(Self { storage, selected })
    }

    pub fn selected(&self) -> Option<i64> {
        *self.selected.borrow()
    }

    /// Drop the receiver to unsubscribe
    pub fn subscribe(&self) -> watch::Receiver<Option<i64>> {
        self.selected.subscribe()
    }

    pub async fn select(&self, company_id: Option<i64>) -> SessionResult<()> {
        match company_id {
            Some(id) => {
                self.storage
                    .store(StorageKey::SelectedCompanyId, id.to_string())
                    .await?
            }
            None => self.storage.remove(StorageKey::SelectedCompanyId).await?,
        }
        self.selected.send_replace(company_id);
        Ok(())
    }
}
