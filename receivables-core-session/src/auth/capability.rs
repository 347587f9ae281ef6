use receivables_core_api::domain::permission::{Permission, PermissionGroup};
use receivables_core_db::models::user_context::UserContextModel;
use std::collections::BTreeSet;

/// What the signed-in user may do; admins may do everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    permissions: BTreeSet<Permission>,
    is_admin: bool,
}

impl CapabilitySet {
    pub fn new(permissions: impl IntoIterator<Item = Permission>, is_admin: bool) -> Self {
        Self {
            permissions: permissions.into_iter().collect(),
            is_admin,
        }
    }

    pub fn admin() -> Self {
        Self::new([], true)
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn allows(&self, permission: Permission) -> bool {
        self.is_admin || self.permissions.contains(&permission)
    }

    pub fn allows_any(&self, permissions: &[Permission]) -> bool {
        self.is_admin || permissions.iter().any(|p| self.permissions.contains(p))
    }

    /// Groups with at least one granted permission, in display order
    pub fn visible_groups(&self) -> Vec<PermissionGroup> {
        PermissionGroup::ALL
            .iter()
            .copied()
            .filter(|group| self.allows_any(group.permissions()))
            .collect()
    }
}

impl From<&UserContextModel> for CapabilitySet {
    fn from(context: &UserContextModel) -> Self {
        Self::new(context.permissions.iter().copied(), context.is_admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_allows_everything() {
        let admin = CapabilitySet::admin();
        for permission in Permission::ALL {
            assert!(admin.allows(permission));
        }
        assert_eq!(admin.visible_groups(), PermissionGroup::ALL.to_vec());
    }

    #[test]
    fn test_plain_user_sees_granted_groups_only() {
        let context = UserContextModel {
            user_id: Some(3),
            role_name: "Clerk".to_string(),
            permissions: vec![Permission::CreateInvoice],
            is_admin: false,
        };
        let capabilities = CapabilitySet::from(&context);

        assert!(capabilities.allows(Permission::CreateInvoice));
        assert!(!capabilities.allows(Permission::ManageRoles));
        assert_eq!(
            capabilities.visible_groups(),
            vec![PermissionGroup::of(Permission::CreateInvoice).unwrap()]
        );
    }
}
