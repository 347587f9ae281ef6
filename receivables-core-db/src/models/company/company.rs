use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::identifiable::Identifiable;
use crate::models::timestamp::{deserialize_optional_timestamp, serialize_optional_timestamp};

use super::bank_account::BankAccountModel;
use super::company_address::CompanyAddressModel;
use super::company_user::CompanyUserModel;
use super::financial_settings::FinancialSettingsModel;
use super::payment_settings::PaymentSettingsModel;

/// Company as returned by `GET /api/companies/{id}`
///
/// The edit flows never patch this struct directly: they work on the raw JSON
/// snapshot, which also carries flattened editing fields (`financial`,
/// `payment`, `addressLine1`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyModel {
    pub id: i64,

    #[serde(default)]
    pub legal_name: String,
    #[serde(default)]
    pub trade_name: String,
    #[serde(default)]
    pub company_code: String,
    #[serde(default)]
    pub base_currency: String,
    #[serde(default)]
    pub time_zone: String,
    #[serde(default)]
    pub country: String,

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
    pub financial_settings: Option<FinancialSettingsModel>,
    #[serde(default)]
    pub payment_settings: Option<PaymentSettingsModel>,
    #[serde(default)]
    pub company_address: Option<CompanyAddressModel>,
    #[serde(default)]
    pub bank_accounts: Vec<BankAccountModel>,
    #[serde(default)]
    pub users: Vec<CompanyUserModel>,
    #[serde(default)]
    pub company_customers: Vec<CompanyCustomerRef>,
}

/// Bare reference to a customer owned by the company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyCustomerRef {
    pub id: i64,
}

impl CompanyModel {
    /// The account flagged as default, falling back to the first one
    pub fn default_bank_account(&self) -> Option<&BankAccountModel> {
        self.bank_accounts
            .iter()
            .find(|account| account.is_default == Some(true))
            .or_else(|| self.bank_accounts.first())
    }
}

impl Identifiable for CompanyModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::company::common_enums::UserStatus;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn test_deserialize_backend_company() {
        let company: CompanyModel = serde_json::from_value(json!({
            "id": 12,
            "legalName": "Acme Holdings",
            "tradeName": "Acme",
            "companyCode": "ACM",
            "baseCurrency": "USD",
            "timeZone": "America/New_York",
            "country": "US",
            "createdAt": "2025-01-10T09:30:00",
            "updatedAt": null,
            "financialSettings": {
                "id": 3,
                "fiscalYearStartMonth": 4,
                "defaultArAccountCode": "1200",
                "revenueRecognitionMode": "ON_INVOICE",
                "defaultTaxHandling": "EXCLUSIVE",
                "defaultPaymentTerms": "NET30",
                "allowOtherTerms": true,
                "enableCreditLimitChecking": false,
                "agingBucketConfig": "0-30,31-60,61-90,90+",
                "dunningFrequencyDays": 30,
                "enableAutomatedDunningEmails": true,
                "defaultCreditLimit": 5000.5
            },
            "bankAccounts": [
                { "id": 1, "bankName": "First", "accountNumber": "001", "isDefault": false },
                { "id": 2, "bankName": "Second", "accountNumber": "002", "isDefault": true }
            ],
            "users": [
                { "id": 9, "name": "Ada", "email": "ada@acme.test", "status": "active",
                  "role": { "id": 1, "name": "Admin", "description": "All access" } }
            ],
            "companyCustomers": [{ "id": 100 }]
        }))
        .unwrap();

        assert_eq!(company.get_id(), 12);
        assert!(company.created_at.is_some());
        assert!(company.updated_at.is_none());
        let financial = company.financial_settings.as_ref().unwrap();
        assert_eq!(financial.default_credit_limit, Some(Decimal::new(50005, 1)));
        assert_eq!(company.default_bank_account().unwrap().bank_name, "Second");
        assert_eq!(company.users[0].status, UserStatus::Active);
        assert!(company.payment_settings.is_none());
    }
}
