use serde_json::Value;
use tokio::sync::watch;

/// In-memory holder of the original and working copies of the entity under edit
///
/// Setters never validate and never fail; every write wakes the subscribers of
/// that slot. Mirroring into session storage is the caller's job.
pub struct SnapshotStore {
    working: watch::Sender<Option<Value>>,
    original: watch::Sender<Option<Value>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        let (working, _) = watch::channel(None);
        let (original, _) = watch::channel(None);
        Self { working, original }
    }

    pub fn set_working(&self, snapshot: Option<Value>) {
        tracing::debug!(present = snapshot.is_some(), "working snapshot replaced");
        self.working.send_replace(snapshot);
    }

    pub fn working(&self) -> Option<Value> {
        self.working.borrow().clone()
    }

    pub fn set_original(&self, snapshot: Option<Value>) {
        tracing::debug!(present = snapshot.is_some(), "original snapshot replaced");
        self.original.send_replace(snapshot);
    }

    pub fn original(&self) -> Option<Value> {
        self.original.borrow().clone()
    }

    /// Drop the returned receiver to unsubscribe
    pub fn subscribe_working(&self) -> watch::Receiver<Option<Value>> {
        self.working.subscribe()
    }

    pub fn subscribe_original(&self) -> watch::Receiver<Option<Value>> {
        self.original.subscribe()
    }

    pub fn clear(&self) {
        self.set_working(None);
        self.set_original(None);
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::error::Error;

    #[test]
    fn test_set_and_get_without_subscribers() {
        let store = SnapshotStore::new();
        assert!(store.working().is_none());
        assert!(store.original().is_none());

        store.set_working(Some(json!({ "legalName": "Acme" })));
        store.set_original(Some(json!({ "legalName": "Acme" })));
        assert_eq!(store.working(), Some(json!({ "legalName": "Acme" })));

        store.clear();
        assert!(store.working().is_none());
        assert!(store.original().is_none());
    }

    #[tokio::test]
    async fn test_subscribers_see_every_write() -> Result<(), Box<dyn Error + Send + Sync>> {
        let store = SnapshotStore::new();
        let mut working = store.subscribe_working();
        let original = store.subscribe_original();

        store.set_working(Some(json!({ "id": 1 })));
        working.changed().await?;
        assert_eq!(*working.borrow_and_update(), Some(json!({ "id": 1 })));
        assert!(!original.has_changed()?);

        store.set_working(None);
        working.changed().await?;
        assert!(working.borrow().is_none());

        Ok(())
    }

    #[test]
    fn test_dropped_subscriber_does_not_block_writes() {
        let store = SnapshotStore::new();
        drop(store.subscribe_original());
        store.set_original(Some(json!([])));
        assert_eq!(store.original(), Some(json!([])));
    }
}
