use serde::{Deserialize, Serialize};

/// Payment methods a company accepts from its customers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSettingsModel {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub accept_check: bool,
    #[serde(default)]
    pub accept_credit_card: bool,
    #[serde(default)]
    pub accept_bank_transfer: bool,
    #[serde(default)]
    pub accept_cash: bool,
    #[serde(default)]
    pub remittance_instructions: Option<String>,
}

impl PaymentSettingsModel {
    /// At least one method must be accepted for the banking step to be valid
    pub fn accepts_any(&self) -> bool {
        self.accept_check || self.accept_credit_card || self.accept_bank_transfer || self.accept_cash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_any() {
        let none: PaymentSettingsModel = serde_json::from_value(json!({})).unwrap();
        assert!(!none.accepts_any());

        let cash: PaymentSettingsModel = serde_json::from_value(json!({ "acceptCash": true })).unwrap();
        assert!(cash.accepts_any());
    }
}
