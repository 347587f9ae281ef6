use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::identifiable::Identifiable;
use crate::models::timestamp::{deserialize_optional_timestamp, serialize_optional_timestamp};

use super::customer_sections::{
    CashApplicationModel, CustomerAddressModel, DunningModel, EftModel, StatementModel, VatModel,
};

/// Customer as returned by `GET /customer/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerModel {
    pub id: i64,
    /// Business-facing customer number, distinct from the row id
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_type: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub deleted: bool,

    #[serde(default)]
    pub company_id: Option<i64>,
    #[serde(default)]
    pub company_name: Option<String>,
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

    #[serde(default)]
    pub address: Option<CustomerAddressModel>,
    #[serde(default)]
    pub cash_application: Option<CashApplicationModel>,
    #[serde(default)]
    pub dunning: Option<DunningModel>,
    #[serde(default)]
    pub eft: Option<EftModel>,
    #[serde(default)]
    pub statement: Option<StatementModel>,
    #[serde(default)]
    pub vat: Option<VatModel>,
}

impl Identifiable for CustomerModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}
