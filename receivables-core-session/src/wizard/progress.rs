use receivables_core_db::repository::json::{load_json, store_json};
use receivables_core_db::repository::session_storage::SessionStorage;
use receivables_core_db::repository::storage_key::StorageKey;

use super::step::WizardStep;
use crate::error::SessionResult;

/// Which steps of a wizard the user may open
///
/// Add mode starts with the first step and grows one step per successful
/// step save. Edit mode opens every step at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardProgress<S: WizardStep> {
    allowed: Vec<S>,
    edit_mode: bool,
}

impl<S: WizardStep> WizardProgress<S> {
    pub fn for_add() -> Self {
        Self {
            allowed: vec![S::first()],
            edit_mode: false,
        }
    }

    pub fn for_edit() -> Self {
        Self {
            allowed: S::ALL.to_vec(),
            edit_mode: true,
        }
    }

    /// Add-mode progress from persisted step keys; unknown keys are dropped
    pub fn from_keys<K: AsRef<str>>(keys: &[K]) -> Self {
        let mut progress = Self::for_add();
        for step in keys.iter().filter_map(|key| S::from_key(key.as_ref())) {
            progress.unlock(step);
        }
        progress
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn allowed(&self) -> &[S] {
        &self.allowed
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.allowed.iter().map(|step| step.key()).collect()
    }

    pub fn can_visit(&self, step: S) -> bool {
        self.edit_mode || self.allowed.contains(&step)
    }

    pub fn unlock(&mut self, step: S) {
        if !self.allowed.contains(&step) {
            self.allowed.push(step);
        }
    }

    /// Record a successful save of `step`, returning the step to move to
    pub fn complete(&mut self, step: S) -> Option<S> {
        let next = step.next()?;
        self.unlock(next);
        Some(next)
    }

    pub async fn persist(&self, storage: &dyn SessionStorage) -> SessionResult<()> {
        store_json(storage, StorageKey::AllowedTabs, &self.keys()).await?;
        Ok(())
    }

    /// Progress saved by an earlier add-mode page load, or a fresh start
    pub async fn restore(storage: &dyn SessionStorage) -> SessionResult<Self> {
        let keys: Option<Vec<String>> = load_json(storage, StorageKey::AllowedTabs).await?;
        Ok(keys.map(|keys| Self::from_keys(&keys)).unwrap_or_else(Self::for_add))
    }
}
