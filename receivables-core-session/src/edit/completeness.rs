use serde_json::{Map, Value};
use thiserror::Error;
use validator::Validate;

pub const BASIC_INFO_TAB: &str = "Basic Info";
pub const ADDRESS_INFO_TAB: &str = "Address Info";
pub const FINANCIAL_TAB: &str = "Financial & AR Settings";

/// Why a working company cannot be saved yet; the message is shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IncompleteRecord {
    #[error("Company data is missing. Please reload and try again.")]
    Missing,

    #[error("Please fill all required fields in the {0} tab.")]
    RequiredFields(&'static str),

    #[error("Financial & AR Settings requires a valid dunning frequency (>= 1).")]
    DunningFrequency,

    #[error("Financial & AR Settings requires a valid credit limit (>= 0).")]
    CreditLimit,
}

impl IncompleteRecord {
    /// Wizard tab the user has to go back to
    pub fn tab(&self) -> &'static str {
        match self {
            IncompleteRecord::Missing => BASIC_INFO_TAB,
            IncompleteRecord::RequiredFields(tab) => *tab,
            IncompleteRecord::DunningFrequency | IncompleteRecord::CreditLimit => FINANCIAL_TAB,
        }
    }
}

#[derive(Debug, Validate)]
struct BasicInfoDraft {
    #[validate(length(min = 1))]
    legal_name: String,
    #[validate(length(min = 1))]
    trade_name: String,
    #[validate(length(min = 1))]
    company_code: String,
    #[validate(length(min = 1))]
    country: String,
    #[validate(length(min = 1))]
    base_currency: String,
    #[validate(length(min = 1))]
    time_zone: String,
}

#[derive(Debug, Validate)]
struct AddressDraft {
    #[validate(length(min = 1))]
    address_line1: String,
    #[validate(length(min = 1))]
    city: String,
    #[validate(length(min = 1))]
    state_province: String,
    #[validate(length(min = 1))]
    postal_code: String,
    #[validate(length(min = 1))]
    address_country: String,
    #[validate(length(min = 1))]
    primary_contact_name: String,
    #[validate(length(min = 1))]
    primary_contact_email: String,
    #[validate(length(min = 1))]
    primary_contact_phone: String,
    #[validate(length(min = 1))]
    primary_contact_country: String,
}

#[derive(Debug, Validate)]
struct FinancialDraft {
    #[validate(length(min = 1))]
    fiscal_year_start_month: String,
    #[validate(length(min = 1))]
    revenue_recognition_mode: String,
    #[validate(length(min = 1))]
    default_tax_handling: String,
    #[validate(length(min = 1))]
    default_payment_terms: String,
    #[validate(length(min = 1))]
    aging_bucket_config: String,
    #[validate(length(min = 1))]
    dunning_frequency_days: String,
    #[validate(length(min = 1))]
    default_credit_limit: String,
}

#[derive(Debug, Validate)]
struct DunningDraft {
    #[validate(required, range(min = 1.0))]
    dunning_frequency_days: Option<f64>,
}

#[derive(Debug, Validate)]
struct CreditLimitDraft {
    #[validate(required, range(min = 0.0))]
    default_credit_limit: Option<f64>,
}

/// Check that a working company carries everything the update endpoint needs
///
/// Address fields are read from `companyAddress` when present, otherwise from
/// the flattened root; financial fields from `financial`, falling back to
/// `financialSettings`. Numbers may arrive as numbers or numeric strings.
pub fn check_company_complete(working: Option<&Value>) -> Result<(), IncompleteRecord> {
    let company = working
        .and_then(Value::as_object)
        .ok_or(IncompleteRecord::Missing)?;

    let basic = BasicInfoDraft {
        legal_name: text(company, "legalName"),
        trade_name: text(company, "tradeName"),
        company_code: text(company, "companyCode"),
        country: text(company, "country"),
        base_currency: text(company, "baseCurrency"),
        time_zone: text(company, "timeZone"),
    };
    basic
        .validate()
        .map_err(|_| IncompleteRecord::RequiredFields(BASIC_INFO_TAB))?;

    let address_source = section(company, "companyAddress").unwrap_or(company);
    let address = AddressDraft {
        address_line1: text(address_source, "addressLine1"),
        city: text(address_source, "city"),
        state_province: text(address_source, "stateProvince"),
        postal_code: text(address_source, "postalCode"),
        address_country: text(address_source, "addressCountry"),
        primary_contact_name: text(address_source, "primaryContactName"),
        primary_contact_email: text(address_source, "primaryContactEmail"),
        primary_contact_phone: text(address_source, "primaryContactPhone"),
        primary_contact_country: text(address_source, "primaryContactCountry"),
    };
    address
        .validate()
        .map_err(|_| IncompleteRecord::RequiredFields(ADDRESS_INFO_TAB))?;

    let empty = Map::new();
    let financial_source = section(company, "financial")
        .or_else(|| section(company, "financialSettings"))
        .unwrap_or(&empty);
    let financial = FinancialDraft {
        fiscal_year_start_month: text(financial_source, "fiscalYearStartMonth"),
        revenue_recognition_mode: text(financial_source, "revenueRecognitionMode"),
        default_tax_handling: text(financial_source, "defaultTaxHandling"),
        default_payment_terms: text(financial_source, "defaultPaymentTerms"),
        aging_bucket_config: text(financial_source, "agingBucketConfig"),
        dunning_frequency_days: text(financial_source, "dunningFrequencyDays"),
        default_credit_limit: text(financial_source, "defaultCreditLimit"),
    };
    financial
        .validate()
        .map_err(|_| IncompleteRecord::RequiredFields(FINANCIAL_TAB))?;

    DunningDraft {
        dunning_frequency_days: number(financial_source, "dunningFrequencyDays"),
    }
    .validate()
    .map_err(|_| IncompleteRecord::DunningFrequency)?;

    CreditLimitDraft {
        default_credit_limit: number(financial_source, "defaultCreditLimit"),
    }
    .validate()
    .map_err(|_| IncompleteRecord::CreditLimit)?;

    Ok(())
}

fn section<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    object.get(key).and_then(Value::as_object)
}

/// Trimmed text form of a field; absent and `null` read as empty
fn text(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string(),
    }
}

fn number(object: &Map<String, Value>, key: &str) -> Option<f64> {
    match object.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}
