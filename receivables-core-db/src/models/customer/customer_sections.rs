use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Billing address of a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAddressModel {
    #[serde(default)]
    pub id: Option<i64>,
    pub address_line1: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub state_province: Option<String>,
}

/// Rules for applying incoming payments to open invoices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashApplicationModel {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub apply_payments: bool,
    #[serde(default)]
    pub auto_apply_payments: bool,
    #[serde(default)]
    pub ship_credit_check: bool,
    #[serde(default)]
    pub tolerance_amount: Option<Decimal>,
    #[serde(default)]
    pub tolerance_percentage: Option<Decimal>,
}

/// Credit limit and dunning escalation levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DunningModel {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub credit_limit: Option<Decimal>,
    #[serde(default)]
    pub dunning_level: Option<String>,
    #[serde(default)]
    pub level1: Option<String>,
    #[serde(default)]
    pub level2: Option<String>,
    #[serde(default)]
    pub level3: Option<String>,
    #[serde(default)]
    pub level4: Option<String>,
    #[serde(default)]
    pub past_due: Option<String>,
    #[serde(default)]
    pub place_on_credit_hold: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EftModel {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub bank_identifier_code: Option<String>,
    #[serde(default)]
    pub iban_account_number: Option<String>,
    #[serde(default)]
    pub enable_ach_payments: bool,
    #[serde(default)]
    pub allow_direct_debit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatModel {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub tax_agency_name: Option<String>,
    #[serde(default)]
    pub tax_identification_number: Option<String>,
    #[serde(default)]
    pub enable_vat_codes: bool,
    #[serde(default)]
    pub vat_code: Option<String>,
}

/// Statement delivery preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementModel {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub send_statements: bool,
    #[serde(default)]
    pub auto_apply_payments: bool,
    #[serde(default)]
    pub tolerance_percentage: Option<Decimal>,
    #[serde(default)]
    pub minimum_amount: Option<Decimal>,
}
