use receivables_core_api::domain::permission::Permission;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cached identity and grants of the signed-in user, stored under `userContext`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContextModel {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub role_name: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    #[serde(default)]
    pub is_admin: bool,
}

/// User payload returned by the login endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserModel {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub user_roles: Vec<UserRoleEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub user_companies: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRoleEntry {
    #[serde(default)]
    pub role: Option<RoleGrantModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleGrantModel {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub permissions: Option<RawPermissions>,
}

/// Roles carry either a list of codes or, for single-grant roles, a bare string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPermissions {
    Many(Vec<Option<String>>),
    One(String),
}

impl RawPermissions {
    /// Non-empty codes in declaration order
    pub fn codes(&self) -> Vec<&str> {
        match self {
            RawPermissions::Many(codes) => codes
                .iter()
                .filter_map(|code| code.as_deref())
                .filter(|code| !code.is_empty())
                .collect(),
            RawPermissions::One(code) if !code.is_empty() => vec![code.as_str()],
            RawPermissions::One(_) => Vec::new(),
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_payload_tolerates_nulls_and_single_codes() {
        let user: LoginUserModel = serde_json::from_value(json!({
            "id": 3,
            "userRoles": [
                { "role": { "name": "Clerk", "permissions": ["VIEW_INVOICES", null, ""] } },
                { "role": { "name": "Collector", "permissions": "VIEW_COLLECTIONS" } },
                { "role": null }
            ],
            "userCompanies": null
        }))
        .unwrap();

        assert_eq!(user.user_roles.len(), 3);
        assert!(user.user_companies.is_empty());
        let first = user.user_roles[0].role.as_ref().unwrap();
        assert_eq!(first.permissions.as_ref().unwrap().codes(), vec!["VIEW_INVOICES"]);
        let second = user.user_roles[1].role.as_ref().unwrap();
        assert_eq!(second.permissions.as_ref().unwrap().codes(), vec!["VIEW_COLLECTIONS"]);
    }

    #[test]
    fn test_context_round_trip_uses_wire_codes() {
        let context = UserContextModel {
            user_id: Some(7),
            role_name: "Clerk".to_string(),
            permissions: vec![Permission::CreateInvoice],
            is_admin: false,
        };
        let json = serde_json::to_value(&context).unwrap();
        assert_eq!(json["permissions"], json!(["CREATE_INVOICE"]));
        assert_eq!(json["isAdmin"], json!(false));
    }
}
