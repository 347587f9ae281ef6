use async_trait::async_trait;
use receivables_core_db::repository::json::load_flag;
use receivables_core_db::repository::session_storage::SessionStorage;
use receivables_core_db::repository::storage_key::StorageKey;
use std::sync::Arc;

use crate::auth::auth_session::{COMPANY_SETUP_ROUTE, LOGIN_ROUTE};
use crate::error::SessionResult;

const COMPANY_SETUP_PREFIXES: [&str; 2] = ["/admin/company/add", "/admin/company/onboarding-complete"];

/// Outcome of a navigation check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

/// Check run before navigating to a route
#[async_trait]
pub trait RouteGuard: Send + Sync {
    async fn can_activate(&self, url: &str) -> SessionResult<GuardDecision>;

    /// Child routes are guarded like their parent
    async fn can_activate_child(&self, url: &str) -> SessionResult<GuardDecision> {
        self.can_activate(url).await
    }
}

/// Lets signed-in users, and users in the middle of signing up, through
pub struct AuthGuard {
    storage: Arc<dyn SessionStorage>,
}

impl AuthGuard {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl RouteGuard for AuthGuard {
    async fn can_activate(&self, _url: &str) -> SessionResult<GuardDecision> {
        if load_flag(self.storage.as_ref(), StorageKey::IsLoggedIn).await? {
            return Ok(GuardDecision::Allow);
        }
        let signing_up = self
            .storage
            .load(StorageKey::SignupUserId)
            .await?
            .is_some_and(|id| !id.is_empty());
        Ok(if signing_up {
            GuardDecision::Allow
        } else {
            GuardDecision::Redirect(LOGIN_ROUTE)
        })
    }
}

/// Keeps users without a company inside the company setup wizard
pub struct CompanyGuard {
    storage: Arc<dyn SessionStorage>,
}

impl CompanyGuard {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl RouteGuard for CompanyGuard {
    async fn can_activate(&self, url: &str) -> SessionResult<GuardDecision> {
        if load_flag(self.storage.as_ref(), StorageKey::HasCompanies).await? {
            return Ok(GuardDecision::Allow);
        }
        if COMPANY_SETUP_PREFIXES.iter().any(|prefix| url.starts_with(prefix)) {
            return Ok(GuardDecision::Allow);
        }
        Ok(GuardDecision::Redirect(COMPANY_SETUP_ROUTE))
    }
}
