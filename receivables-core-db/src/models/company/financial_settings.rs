use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Accounts-receivable defaults configured during onboarding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSettingsModel {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub fiscal_year_start_month: Option<u8>,
    #[serde(default)]
    pub default_ar_account_code: Option<String>,
    #[serde(default)]
    pub revenue_recognition_mode: Option<String>,
    #[serde(default)]
    pub default_tax_handling: Option<String>,
    #[serde(default)]
    pub default_payment_terms: Option<String>,
    #[serde(default)]
    pub allow_other_terms: bool,
    #[serde(default)]
    pub enable_credit_limit_checking: bool,
    /// Comma separated bucket boundaries, e.g. `0-30,31-60,61-90,90+`
    #[serde(default)]
    pub aging_bucket_config: Option<String>,
    #[serde(default)]
    pub dunning_frequency_days: Option<u32>,
    #[serde(default)]
    pub enable_automated_dunning_emails: bool,
    #[serde(default)]
    pub default_credit_limit: Option<Decimal>,
}
