use receivables_core_db::models::user_context::LoginUserModel;
use receivables_core_db::repository::session_storage::SessionStorage;
use receivables_core_db::repository::storage_key::StorageKey;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::user_context::UserContextStore;
use crate::error::SessionResult;
use crate::notify::Notifier;

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/admin/dashboard";
pub const COMPANY_SETUP_ROUTE: &str = "/admin/company/add/step-1";
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired or invalid. Please log in again.";

/// Sign-in state of the client
pub struct AuthSession {
    storage: Arc<dyn SessionStorage>,
    notifier: Arc<dyn Notifier>,
    user_context: UserContextStore,
    signing_out: AtomicBool,
}

impl AuthSession {
    pub fn new(storage: Arc<dyn SessionStorage>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            user_context: UserContextStore::new(storage.clone()),
            storage,
            notifier,
            signing_out: AtomicBool::new(false),
        }
    }

    pub fn user_context(&self) -> &UserContextStore {
        &self.user_context
    }

    /// Record a successful login and return the landing route
    ///
    /// Users without a company are sent to the company wizard.
    pub async fn record_login(&self, user: &LoginUserModel) -> SessionResult<&'static str> {
        self.signing_out.store(false, Ordering::SeqCst);

        if let Some(id) = user.id {
            self.storage.store(StorageKey::SignupUserId, id.to_string()).await?;
        }
        self.storage.store(StorageKey::IsLoggedIn, "true".to_string()).await?;

        let has_companies = !user.user_companies.is_empty();
        self.storage
            .store(StorageKey::HasCompanies, has_companies.to_string())
            .await?;
        self.user_context.set_from_login(Some(user)).await?;

        tracing::info!(user_id = ?user.id, has_companies, "signed in");
        Ok(if has_companies {
            DASHBOARD_ROUTE
        } else {
            COMPANY_SETUP_ROUTE
        })
    }

    /// Drop the whole session and return the login route
    ///
    /// Only the first call of a session acts; later calls return `None` so
    /// concurrent failing requests produce a single notification.
    pub async fn sign_out(&self, message: Option<&str>) -> SessionResult<Option<&'static str>> {
        if self.signing_out.swap(true, Ordering::SeqCst) {
            return Ok(None);
        }

        if let Some(message) = message {
            self.notifier.error(message);
        }
        self.storage.clear().await?;

        tracing::info!("signed out");
        Ok(Some(LOGIN_ROUTE))
    }

    pub fn is_signing_out(&self) -> bool {
        self.signing_out.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationLevel;
    use crate::test_helper::{setup_test_context, RecordingNotifier};
    use receivables_core_db::repository::json::load_flag;
    use receivables_core_db::repository::load::LoadEntry;
    use serde_json::json;
    use std::error::Error;

    fn user(companies: serde_json::Value) -> LoginUserModel {
        serde_json::from_value(json!({
            "id": 31,
            "userRoles": [{ "role": { "name": "Admin", "permissions": [] } }],
            "userCompanies": companies
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_record_login_routes_by_companies() -> Result<(), Box<dyn Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let auth = AuthSession::new(ctx.storage.clone(), ctx.notifier.clone());

        assert_eq!(auth.record_login(&user(json!([]))).await?, COMPANY_SETUP_ROUTE);
        assert!(!load_flag(ctx.storage.as_ref(), StorageKey::HasCompanies).await?);

        assert_eq!(auth.record_login(&user(json!([{ "id": 1 }]))).await?, DASHBOARD_ROUTE);
        assert!(load_flag(ctx.storage.as_ref(), StorageKey::IsLoggedIn).await?);
        assert!(load_flag(ctx.storage.as_ref(), StorageKey::HasCompanies).await?);
        assert_eq!(ctx.storage.load(StorageKey::SignupUserId).await?.as_deref(), Some("31"));
        assert!(auth.user_context().context().await?.is_admin);
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_out_runs_once() -> Result<(), Box<dyn Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let auth = AuthSession::new(ctx.storage.clone(), ctx.notifier.clone());
        auth.record_login(&user(json!([{ "id": 1 }]))).await?;

        assert_eq!(auth.sign_out(Some(SESSION_EXPIRED_MESSAGE)).await?, Some(LOGIN_ROUTE));
        assert_eq!(auth.sign_out(Some(SESSION_EXPIRED_MESSAGE)).await?, None);

        assert!(ctx.storage.is_empty());
        assert!(auth.is_signing_out());
        assert_eq!(
            ctx.notifier.messages(NotificationLevel::Error),
            vec![SESSION_EXPIRED_MESSAGE]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_out_without_message_is_silent() -> Result<(), Box<dyn Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let notifier = Arc::new(RecordingNotifier::default());
        let auth = AuthSession::new(ctx.storage.clone(), notifier.clone());

        auth.sign_out(None).await?;

        assert!(notifier.notifications.lock().is_empty());
        Ok(())
    }
}
