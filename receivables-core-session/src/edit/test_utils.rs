use serde_json::{json, Value};

/// Company as the backend returns it, with the flattened editing fields the
/// wizard steps keep at the root
pub fn create_test_company_json(id: i64) -> Value {
    json!({
        "id": id,
        "legalName": "Acme Holdings",
        "tradeName": "Acme",
        "companyCode": "ACM",
        "country": "US",
        "baseCurrency": "USD",
        "timeZone": "America/New_York",
        "createdAt": "2025-01-10T09:30:00",
        "addressLine1": "1 Main Street",
        "city": "Springfield",
        "stateProvince": "IL",
        "postalCode": "62701",
        "addressCountry": "US",
        "primaryContactName": "Jane Doe",
        "primaryContactEmail": "jane@acme.example",
        "primaryContactPhone": "+1 555 0100",
        "website": "https://acme.example",
        "primaryContactCountry": "US",
        "companyAddress": {
            "id": 5,
            "addressLine1": "1 Main Street",
            "city": "Springfield",
            "stateProvince": "IL",
            "postalCode": "62701",
            "addressCountry": "US",
            "primaryContactName": "Jane Doe",
            "primaryContactEmail": "jane@acme.example",
            "primaryContactPhone": "+1 555 0100",
            "primaryContactCountry": "US"
        },
        "financial": {
            "id": 3,
            "fiscalYearStartMonth": 1,
            "defaultArAccountCode": "1200",
            "revenueRecognitionMode": "ON_INVOICE",
            "defaultTaxHandling": "EXCLUSIVE",
            "defaultPaymentTerms": "NET30",
            "allowOtherTerms": true,
            "enableCreditLimitChecking": true,
            "agingBucketConfig": "0-30,31-60,61-90,90+",
            "dunningFrequencyDays": 30,
            "enableAutomatedDunningEmails": false,
            "defaultCreditLimit": 10000
        },
        "payment": {
            "acceptCheck": true,
            "acceptCreditCard": false,
            "acceptBankTransfer": true,
            "acceptCash": false,
            "remittanceInstructions": "Wire to the default account"
        },
        "bankAccounts": [
            { "id": 1, "bankName": "First Bank", "accountNumber": "0001", "ifscSwift": "FBANKUS33", "currency": "USD", "isDefault": true }
        ],
        "users": [
            { "id": 8, "name": "Ann Admin", "email": "ann@acme.example", "status": "ACTIVE", "roleId": 1 }
        ]
    })
}

pub fn create_test_customer_json(id: i64) -> Value {
    json!({
        "id": id,
        "customerId": 1000 + id,
        "customerName": "Globex",
        "customerType": "Retail",
        "email": "ap@globex.example",
        "deleted": false,
        "companyId": 1,
        "companyName": "Acme Holdings",
        "address": {
            "id": 21,
            "addressLine1": "42 Side Road",
            "city": "Shelbyville",
            "stateProvince": "IL",
            "postalCode": "62565",
            "country": "US"
        },
        "cashApplication": {
            "id": 22,
            "applyPayments": true,
            "autoApplyPayments": false,
            "shipCreditCheck": false,
            "toleranceAmount": null,
            "tolerancePercentage": 2
        },
        "statement": null,
        "eft": {
            "id": 23,
            "bankName": "Second Bank",
            "bankIdentifierCode": "SBANKUS44",
            "ibanAccountNumber": "US00SBANK0001",
            "enableAchPayments": true
        },
        "vat": {
            "id": 24,
            "taxAgencyName": "IRS",
            "taxIdentificationNumber": "12-3456789",
            "enableVatCodes": false
        },
        "dunning": {
            "id": 25,
            "creditLimit": 5000,
            "dunningLevel": "STANDARD",
            "pastDue": "30",
            "level1": "Reminder",
            "level2": "Warning",
            "level3": "Final notice",
            "level4": "Collections",
            "placeOnCreditHold": false
        }
    })
}
