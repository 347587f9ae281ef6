use receivables_core_api::domain::permission::Permission;
use receivables_core_db::models::user_context::{LoginUserModel, UserContextModel};
use receivables_core_db::repository::json::{load_json, store_json};
use receivables_core_db::repository::session_storage::SessionStorage;
use receivables_core_db::repository::storage_key::StorageKey;
use std::str::FromStr;
use std::sync::Arc;

use super::capability::CapabilitySet;
use crate::error::SessionResult;

/// Context derived from the login payload
///
/// Permissions are merged across roles without duplicates, in first-seen
/// order; codes the client does not know are skipped. The user is an admin
/// when any role is named `admin`, in any case.
pub fn build_context(user: &LoginUserModel) -> UserContextModel {
    let roles: Vec<_> = user.user_roles.iter().filter_map(|entry| entry.role.as_ref()).collect();

    let mut permissions = Vec::new();
    for code in roles
        .iter()
        .filter_map(|role| role.permissions.as_ref())
        .flat_map(|raw| raw.codes())
    {
        match Permission::from_str(code) {
            Ok(permission) if !permissions.contains(&permission) => permissions.push(permission),
            Ok(_) => {}
            Err(()) => tracing::debug!(code, "skipping unknown permission code"),
        }
    }

    let is_admin = roles
        .iter()
        .any(|role| role.name.as_deref().is_some_and(|name| name.eq_ignore_ascii_case("admin")));

    let role_name = user
        .user_roles
        .first()
        .and_then(|entry| entry.role.as_ref())
        .and_then(|role| role.name.clone())
        .unwrap_or_default();

    UserContextModel {
        user_id: user.id,
        role_name,
        permissions,
        is_admin,
    }
}

/// Cached user context kept under `userContext`
pub struct UserContextStore {
    storage: Arc<dyn SessionStorage>,
}

impl UserContextStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Cache the context of a fresh login; no user clears it
    pub async fn set_from_login(&self, user: Option<&LoginUserModel>) -> SessionResult<()> {
        match user {
            Some(user) => self.save(&build_context(user)).await,
            None => self.clear().await,
        }
    }

    /// Context for a user who just created their own company
    pub async fn set_admin_defaults(&self, user_id: Option<i64>) -> SessionResult<()> {
        self.save(&UserContextModel {
            user_id,
            role_name: "Admin".to_string(),
            permissions: Vec::new(),
            is_admin: true,
        })
        .await
    }

    /// Current context; missing or malformed caches read as empty
    pub async fn context(&self) -> SessionResult<UserContextModel> {
        let context: Option<UserContextModel> = load_json(self.storage.as_ref(), StorageKey::UserContext).await?;
        Ok(context.unwrap_or_default())
    }

    pub async fn capabilities(&self) -> SessionResult<CapabilitySet> {
        Ok(CapabilitySet::from(&self.context().await?))
    }

    pub async fn has_permission(&self, permission: Permission) -> SessionResult<bool> {
        Ok(self.capabilities().await?.allows(permission))
    }

    pub async fn clear(&self) -> SessionResult<()> {
        self.storage.remove(StorageKey::UserContext).await?;
        Ok(())
    }

    async fn save(&self, context: &UserContextModel) -> SessionResult<()> {
        store_json(self.storage.as_ref(), StorageKey::UserContext, context).await?;
        Ok(())
    }
}
