/// How a root-level editable field is filtered and compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldArea {
    /// Compared by strict equality
    Scalar,
    /// Sub-record restricted to the listed keys, compared key by key
    Nested(&'static [&'static str]),
    /// Array of sub-records, each restricted to the listed keys, compared as a whole
    Collection(&'static [&'static str]),
}

/// Static table of the fields an edit flow may send to the backend
#[derive(Debug)]
pub struct FieldAllowlist {
    fields: &'static [(&'static str, FieldArea)],
}

impl FieldAllowlist {
    pub const fn new(fields: &'static [(&'static str, FieldArea)]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [(&'static str, FieldArea)] {
        self.fields
    }

    pub fn area(&self, key: &str) -> Option<FieldArea> {
        self.fields
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, area)| *area)
    }

    pub fn allows(&self, key: &str) -> bool {
        self.area(key).is_some()
    }

    /// Whether `key` is editable inside the nested or collection area `area`
    pub fn allows_nested(&self, area: &str, key: &str) -> bool {
        match self.area(area) {
            Some(FieldArea::Nested(keys)) | Some(FieldArea::Collection(keys)) => keys.contains(&key),
            _ => false,
        }
    }
}

const COMPANY_FINANCIAL_FIELDS: &[&str] = &[
    "fiscalYearStartMonth",
    "defaultArAccountCode",
    "revenueRecognitionMode",
    "defaultTaxHandling",
    "defaultPaymentTerms",
    "allowOtherTerms",
    "enableCreditLimitChecking",
    "agingBucketConfig",
    "dunningFrequencyDays",
    "enableAutomatedDunningEmails",
    "defaultCreditLimit",
];

const COMPANY_PAYMENT_FIELDS: &[&str] = &[
    "acceptCheck",
    "acceptCreditCard",
    "acceptBankTransfer",
    "acceptCash",
    "remittanceInstructions",
];

const COMPANY_BANK_ACCOUNT_FIELDS: &[&str] =
    &["bankName", "accountNumber", "ifscSwift", "currency", "isDefault"];

const COMPANY_USER_FIELDS: &[&str] = &["id", "name", "email", "status", "roleId"];

/// Editable company fields. Address and primary contact are edited flattened
/// at the root of the working snapshot.
pub static COMPANY_FIELDS: FieldAllowlist = FieldAllowlist::new(&[
    ("legalName", FieldArea::Scalar),
    ("tradeName", FieldArea::Scalar),
    ("companyCode", FieldArea::Scalar),
    ("country", FieldArea::Scalar),
    ("baseCurrency", FieldArea::Scalar),
    ("timeZone", FieldArea::Scalar),
    ("addressLine1", FieldArea::Scalar),
    ("city", FieldArea::Scalar),
    ("stateProvince", FieldArea::Scalar),
    ("postalCode", FieldArea::Scalar),
    ("addressCountry", FieldArea::Scalar),
    ("primaryContactName", FieldArea::Scalar),
    ("primaryContactEmail", FieldArea::Scalar),
    ("primaryContactPhone", FieldArea::Scalar),
    ("website", FieldArea::Scalar),
    ("primaryContactCountry", FieldArea::Scalar),
    ("financial", FieldArea::Nested(COMPANY_FINANCIAL_FIELDS)),
    ("payment", FieldArea::Nested(COMPANY_PAYMENT_FIELDS)),
    ("bankAccounts", FieldArea::Collection(COMPANY_BANK_ACCOUNT_FIELDS)),
    ("users", FieldArea::Collection(COMPANY_USER_FIELDS)),
]);

const CUSTOMER_ADDRESS_FIELDS: &[&str] =
    &["addressLine1", "city", "stateProvince", "postalCode", "country"];

const CUSTOMER_CASH_APPLICATION_FIELDS: &[&str] = &[
    "applyPayments",
    "autoApplyPayments",
    "shipCreditCheck",
    "tolerancePercentage",
    "toleranceAmount",
];

const CUSTOMER_STATEMENT_FIELDS: &[&str] =
    &["sendStatements", "autoApplyPayments", "tolerancePercentage", "minimumAmount"];

const CUSTOMER_EFT_FIELDS: &[&str] = &[
    "bankName",
    "ibanAccountNumber",
    "bankIdentifierCode",
    "enableAchPayments",
    "allowDirectDebit",
];

const CUSTOMER_VAT_FIELDS: &[&str] =
    &["taxIdentificationNumber", "taxAgencyName", "enableVatCodes", "vatCode"];

const CUSTOMER_DUNNING_FIELDS: &[&str] = &[
    "placeOnCreditHold",
    "creditLimit",
    "dunningLevel",
    "pastDue",
    "level1",
    "level2",
    "level3",
    "level4",
];

pub static CUSTOMER_FIELDS: FieldAllowlist = FieldAllowlist::new(&[
    ("customerName", FieldArea::Scalar),
    ("customerType", FieldArea::Scalar),
    ("email", FieldArea::Scalar),
    ("address", FieldArea::Nested(CUSTOMER_ADDRESS_FIELDS)),
    ("cashApplication", FieldArea::Nested(CUSTOMER_CASH_APPLICATION_FIELDS)),
    ("statement", FieldArea::Nested(CUSTOMER_STATEMENT_FIELDS)),
    ("eft", FieldArea::Nested(CUSTOMER_EFT_FIELDS)),
    ("vat", FieldArea::Nested(CUSTOMER_VAT_FIELDS)),
    ("dunning", FieldArea::Nested(CUSTOMER_DUNNING_FIELDS)),
]);
