use serde::{Deserialize, Serialize};

/// Bank account a company publishes for remittances
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountModel {
    #[serde(default)]
    pub id: Option<i64>,
    pub bank_name: String,
    pub account_number: String,
    #[serde(default)]
    pub ifsc_swift: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub is_default: Option<bool>,
}
