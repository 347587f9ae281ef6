use receivables_core_db::repository::session_storage::SessionStorage;
use std::sync::Arc;

use crate::auth::auth_session::AuthSession;
use crate::company_selection::CompanySelection;
use crate::config::ClientConfig;
use crate::directory::Directory;
use crate::edit::entity::{CompanyEdit, CustomerEdit};
use crate::edit::gateway::{CompanyGateway, CustomerGateway};
use crate::edit::session::EditSession;
use crate::error::SessionResult;
use crate::guard::{AuthGuard, CompanyGuard};
use crate::http::HttpBackend;
use crate::notify::{Notifier, TracingNotifier};
use crate::storage::{FileStorage, InMemoryStorage};

/// Wires storage, backend and notifications into the client services
///
/// Everything built from one instance shares the same session storage, so a
/// sign-out triggered by a rejected token drops every edit mirror too.
pub struct ClientRepositories {
    storage: Arc<dyn SessionStorage>,
    notifier: Arc<dyn Notifier>,
    auth: Arc<AuthSession>,
    backend: Arc<HttpBackend>,
}

impl ClientRepositories {
    pub fn new(config: ClientConfig) -> SessionResult<Self> {
        Self::with_notifier(config, Arc::new(TracingNotifier))
    }

    /// Build with a custom notification sink, e.g. a [`crate::notify::ToastNotifier`]
    pub fn with_notifier(config: ClientConfig, notifier: Arc<dyn Notifier>) -> SessionResult<Self> {
        let storage: Arc<dyn SessionStorage> = match &config.session_file {
            Some(path) => {
                tracing::info!(path = %path.display(), "using file-backed session storage");
                Arc::new(FileStorage::new(path))
            }
            None => Arc::new(InMemoryStorage::new()),
        };

        let auth = Arc::new(AuthSession::new(storage.clone(), notifier.clone()));
        let backend = Arc::new(HttpBackend::new(&config, storage.clone(), Some(auth.clone()))?);

        Ok(Self {
            storage,
            notifier,
            auth,
            backend,
        })
    }

    pub fn storage(&self) -> Arc<dyn SessionStorage> {
        self.storage.clone()
    }

    pub fn auth(&self) -> Arc<AuthSession> {
        self.auth.clone()
    }

    pub fn backend(&self) -> Arc<HttpBackend> {
        self.backend.clone()
    }

    pub fn company_edit_session(&self) -> EditSession<CompanyEdit> {
        EditSession::new(
            self.storage.clone(),
            Arc::new(CompanyGateway::new(self.backend.clone())),
            self.notifier.clone(),
        )
    }

    pub fn customer_edit_session(&self) -> EditSession<CustomerEdit> {
        EditSession::new(
            self.storage.clone(),
            Arc::new(CustomerGateway::new(self.backend.clone())),
            self.notifier.clone(),
        )
    }

    pub fn auth_guard(&self) -> AuthGuard {
        AuthGuard::new(self.storage.clone())
    }

    pub fn company_guard(&self) -> CompanyGuard {
        CompanyGuard::new(self.storage.clone())
    }

    pub async fn company_selection(&self) -> SessionResult<CompanySelection> {
        CompanySelection::load(self.storage.clone()).await
    }

    pub fn directory(&self) -> Directory {
        Directory::new(self.backend.clone(), self.backend.clone())
    }
}
