use parking_lot::RwLock;
use receivables_core_api::domain::envelope::ApiResponse;
use receivables_core_db::repository::json::{load_json, store_json};
use receivables_core_db::repository::session_storage::SessionStorage;
use receivables_core_db::repository::storage_key::StorageKey;
use serde_json::{Map, Value};
use std::marker::PhantomData;
use std::sync::Arc;

use super::diff::changed_payload;
use super::entity::EditableEntity;
use super::gateway::EntityGateway;
use crate::error::{SessionError, SessionResult};
use crate::notify::Notifier;
use crate::snapshot::SnapshotStore;
use crate::wizard::{WizardProgress, WizardStep};

pub const NO_CHANGES_MESSAGE: &str = "No changes detected to update.";

/// Result of a successful [`EditSession::save`]
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Nothing differed from the original; no request was sent
    NoChanges { route: String },
    Saved {
        route: String,
        response: ApiResponse<Value>,
    },
}

impl SaveOutcome {
    /// Where to navigate next
    pub fn route(&self) -> &str {
        match self {
            SaveOutcome::NoChanges { route } | SaveOutcome::Saved { route, .. } => route,
        }
    }
}

struct SessionState<S: WizardStep> {
    entity_id: Option<i64>,
    progress: WizardProgress<S>,
}

/// Add or edit session of a single record
///
/// Holds the original and working snapshots, mirrors them into session
/// storage, gates wizard steps and turns the working snapshot into a minimal
/// patch on save.
pub struct EditSession<E: EditableEntity> {
    storage: Arc<dyn SessionStorage>,
    gateway: Arc<dyn EntityGateway>,
    notifier: Arc<dyn Notifier>,
    snapshots: SnapshotStore,
    state: RwLock<SessionState<E::Step>>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: EditableEntity> EditSession<E> {
    pub fn new(
        storage: Arc<dyn SessionStorage>,
        gateway: Arc<dyn EntityGateway>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            storage,
            gateway,
            notifier,
            snapshots: SnapshotStore::new(),
            state: RwLock::new(SessionState {
                entity_id: None,
                progress: WizardProgress::for_add(),
            }),
            _entity: PhantomData,
        }
    }

    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }

    pub fn entity_id(&self) -> Option<i64> {
        self.state.read().entity_id
    }

    pub fn progress(&self) -> WizardProgress<E::Step> {
        self.state.read().progress.clone()
    }

    pub fn is_edit_mode(&self) -> bool {
        self.state.read().progress.is_edit_mode()
    }

    pub fn can_visit(&self, step: E::Step) -> bool {
        self.state.read().progress.can_visit(step)
    }

    /// Route of `step` in the current mode
    pub fn route_for(&self, step: E::Step) -> String {
        let state = self.state.read();
        let id = state.progress.is_edit_mode().then_some(state.entity_id).flatten();
        E::step_route(step, id)
    }

    /// Start adding a new record, returning the route of the first step
    pub async fn open_new(&self) -> SessionResult<String> {
        self.snapshots.clear();
        self.storage.remove(E::ORIGINAL_KEY).await?;

        let progress = WizardProgress::for_add();
        progress.persist(self.storage.as_ref()).await?;
        *self.state.write() = SessionState {
            entity_id: None,
            progress,
        };

        Ok(E::step_route(E::Step::first(), None))
    }

    /// Pick up an add flow after a reload: step progress and the id of the
    /// record created by the first step
    pub async fn resume_new(&self) -> SessionResult<()> {
        let progress = WizardProgress::restore(self.storage.as_ref()).await?;
        let entity_id = match E::CREATED_ID_KEY {
            Some(key) => load_json::<i64, _>(self.storage.as_ref(), key).await?,
            None => None,
        };
        *self.state.write() = SessionState { entity_id, progress };
        Ok(())
    }

    /// Remember the id the backend assigned to the record being added
    pub async fn record_created(&self, id: i64) -> SessionResult<()> {
        if let Some(key) = E::CREATED_ID_KEY {
            store_json(self.storage.as_ref(), key, &id).await?;
        }
        self.state.write().entity_id = Some(id);
        Ok(())
    }

    /// Start editing an existing record
    ///
    /// Cached snapshots of the same record are restored first so a failed
    /// fetch still leaves the user's work in place; a successful fetch then
    /// replaces both snapshots and their mirrors. Every step is unlocked.
    pub async fn open_existing(&self, id: i64) -> SessionResult<String> {
        *self.state.write() = SessionState {
            entity_id: Some(id),
            progress: WizardProgress::for_edit(),
        };

        let cached_working = self.load_cached(E::EDITING_KEY, id).await?;
        self.snapshots.set_working(cached_working);
        let cached_original = self.load_cached(E::ORIGINAL_KEY, id).await?;
        self.snapshots.set_original(cached_original);

        match self.gateway.fetch(id).await {
            Ok(Some(record)) => {
                store_json(self.storage.as_ref(), E::EDITING_KEY, &record).await?;
                store_json(self.storage.as_ref(), E::ORIGINAL_KEY, &record).await?;
                self.snapshots.set_working(Some(record.clone()));
                self.snapshots.set_original(Some(record));
            }
            Ok(None) => {
                tracing::warn!(entity = E::NAME, id, "backend returned no data");
            }
            Err(err) => {
                tracing::error!(entity = E::NAME, id, error = %err, "failed to load record for editing");
                self.notifier.error(&format!("Error loading {}", E::NAME));
                return Err(err.into());
            }
        }

        Ok(E::step_route(E::Step::first(), Some(id)))
    }

    async fn load_cached(
        &self,
        key: StorageKey,
        id: i64,
    ) -> SessionResult<Option<Value>> {
        let cached: Option<Value> = load_json(self.storage.as_ref(), key).await?;
        Ok(cached.filter(|snapshot| snapshot.get("id").and_then(Value::as_i64) == Some(id)))
    }

    /// Merge the values of one step into the working snapshot
    ///
    /// Root keys are replaced, except that an object merged onto an object
    /// keeps the keys the step did not touch.
    pub async fn merge_step(&self, values: Map<String, Value>) -> SessionResult<Value> {
        let mut working = match self.snapshots.working() {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };

        for (key, value) in values {
            match value {
                Value::Object(incoming) if working.get(&key).is_some_and(Value::is_object) => {
                    if let Some(Value::Object(existing)) = working.get_mut(&key) {
                        existing.extend(incoming);
                    }
                }
                value => {
                    working.insert(key, value);
                }
            }
        }

        let working = Value::Object(working);
        store_json(self.storage.as_ref(), E::EDITING_KEY, &working).await?;
        self.snapshots.set_working(Some(working.clone()));
        Ok(working)
    }

    /// Record that `step` was saved, returning the route to continue with
    pub async fn record_step_saved(&self, step: E::Step) -> SessionResult<String> {
        let (next, progress) = {
            let mut state = self.state.write();
            let next = if state.progress.is_edit_mode() {
                step.next()
            } else {
                state.progress.complete(step)
            };
            (next, state.progress.clone())
        };

        if !progress.is_edit_mode() {
            progress.persist(self.storage.as_ref()).await?;
        }

        Ok(match next {
            Some(next) => self.route_for(next),
            None => E::LIST_ROUTE.to_string(),
        })
    }

    /// Fields that would be sent by [`save`](Self::save) right now
    pub fn changed_payload(&self) -> Map<String, Value> {
        changed_payload(
            self.snapshots.working().as_ref(),
            self.snapshots.original().as_ref(),
            E::allowlist(),
            E::diff_options(),
        )
    }

    /// Typed view of the working snapshot
    pub fn working_model(&self) -> SessionResult<Option<E::Model>> {
        self.snapshots
            .working()
            .map(serde_json::from_value)
            .transpose()
            .map_err(SessionError::from)
    }

    /// Send the changed fields of the working snapshot
    ///
    /// An empty diff sends nothing. A successful patch clears both snapshots
    /// and their mirrors; a failed one leaves them untouched for another try.
    pub async fn save(&self) -> SessionResult<SaveOutcome> {
        let id = self.entity_id().ok_or(SessionError::NotOpen(E::NAME))?;

        // Add-mode records are still being built step by step
        if self.is_edit_mode() {
            if let Err(incomplete) = E::check_complete(self.snapshots.working().as_ref()) {
                self.notifier.error(&incomplete.to_string());
                return Err(incomplete.into());
            }
        }

        let payload = self.changed_payload();
        if payload.is_empty() {
            tracing::debug!(entity = E::NAME, id, "no changes to save");
            self.notifier.info(NO_CHANGES_MESSAGE);
            return Ok(SaveOutcome::NoChanges {
                route: E::LIST_ROUTE.to_string(),
            });
        }

        tracing::info!(entity = E::NAME, id, fields = payload.len(), "saving changes");
        match self.gateway.patch(id, &payload).await {
            Ok(response) => {
                self.snapshots.clear();
                self.notifier.success(&format!("{} updated successfully.", E::TITLE));
                for key in [E::EDITING_KEY, E::ORIGINAL_KEY] {
                    if let Err(error) = self.storage.remove(key).await {
                        tracing::warn!(entity = E::NAME, id, %key, %error, "could not drop saved snapshot mirror");
                    }
                }
                Ok(SaveOutcome::Saved {
                    route: E::LIST_ROUTE.to_string(),
                    response,
                })
            }
            Err(err) => {
                tracing::error!(entity = E::NAME, id, error = %err, "failed to save changes");
                self.notifier.error(&format!("Failed to update {}.", E::NAME));
                Err(err.into())
            }
        }
    }
}
