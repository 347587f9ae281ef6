use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Membership status of a user within a company
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
    Invited,
    #[default]
    Unknown,
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "ACTIVE"),
            UserStatus::Inactive => write!(f, "INACTIVE"),
            UserStatus::Invited => write!(f, "INVITED"),
            UserStatus::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl FromStr for UserStatus {
    type Err = ();

    /// Case-insensitive; the backend is inconsistent about casing
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ACTIVE" => Ok(UserStatus::Active),
            "INACTIVE" => Ok(UserStatus::Inactive),
            "INVITED" => Ok(UserStatus::Invited),
            _ => Err(()),
        }
    }
}

pub fn serialize_user_status<S>(value: &UserStatus, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

/// Unrecognised or missing statuses become `Unknown` rather than failing the whole record
pub fn deserialize_user_status<'de, D>(deserializer: D) -> Result<UserStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let value_str: Option<String> = Option::deserialize(deserializer)?;
    Ok(value_str
        .and_then(|s| UserStatus::from_str(&s).ok())
        .unwrap_or(UserStatus::Unknown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_status_is_case_insensitive() {
        assert_eq!(UserStatus::from_str("active"), Ok(UserStatus::Active));
        assert_eq!(UserStatus::from_str(" Invited "), Ok(UserStatus::Invited));
        assert_eq!(UserStatus::from_str("suspended"), Err(()));
        assert_eq!(UserStatus::Inactive.to_string(), "INACTIVE");
    }
}
