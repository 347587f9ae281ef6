use serde::{Deserialize, Serialize};

use crate::models::identifiable::Identifiable;

use super::common_enums::{deserialize_user_status, serialize_user_status, UserStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoleModel {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// User attached to a company, with the role granted in that company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyUserModel {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(
        default,
        serialize_with = "serialize_user_status",
        deserialize_with = "deserialize_user_status"
    )]
    pub status: UserStatus,
    #[serde(default)]
    pub role: Option<UserRoleModel>,
}

impl Identifiable for CompanyUserModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}
