use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::timestamp::{deserialize_optional_timestamp, serialize_optional_timestamp};

/// Registered address and primary contact of a company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAddressModel {
    #[serde(default)]
    pub id: Option<i64>,
    pub address_line1: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub address_country: Option<String>,
    pub primary_contact_name: Option<String>,
    pub primary_contact_email: Option<String>,
    pub primary_contact_phone: Option<String>,
    pub website: Option<String>,
    pub primary_contact_country: Option<String>,
    #[serde(
        default,
        serialize_with = "serialize_optional_timestamp",
        deserialize_with = "deserialize_optional_timestamp"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        serialize_with = "serialize_optional_timestamp",
        deserialize_with = "deserialize_optional_timestamp"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}
