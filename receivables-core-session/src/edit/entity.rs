use receivables_core_db::models::company::company::CompanyModel;
use receivables_core_db::models::customer::customer::CustomerModel;
use receivables_core_db::models::identifiable::Identifiable;
use receivables_core_db::repository::storage_key::StorageKey;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::allowlist::{FieldAllowlist, COMPANY_FIELDS, CUSTOMER_FIELDS};
use super::completeness::{check_company_complete, IncompleteRecord};
use super::diff::DiffOptions;
use crate::wizard::{CompanyStep, CustomerTab, WizardStep};

/// Static description of a record type editable through a wizard
pub trait EditableEntity: Send + Sync + 'static {
    type Step: WizardStep;
    type Model: DeserializeOwned + Identifiable;

    /// Lower-case noun for messages
    const NAME: &'static str;
    /// Capitalized noun for messages
    const TITLE: &'static str;
    const EDITING_KEY: StorageKey;
    const ORIGINAL_KEY: StorageKey;
    /// Where the id of a record created in add mode is kept across reloads
    const CREATED_ID_KEY: Option<StorageKey>;
    /// Route shown after a finished edit
    const LIST_ROUTE: &'static str;

    fn allowlist() -> &'static FieldAllowlist;

    fn diff_options() -> DiffOptions {
        DiffOptions::default()
    }

    /// Checked before any diff is sent
    fn check_complete(_working: Option<&Value>) -> Result<(), IncompleteRecord> {
        Ok(())
    }

    fn step_route(step: Self::Step, id: Option<i64>) -> String;
}

pub struct CompanyEdit;

impl EditableEntity for CompanyEdit {
    type Step = CompanyStep;
    type Model = CompanyModel;

    const NAME: &'static str = "company";
    const TITLE: &'static str = "Company";
    const EDITING_KEY: StorageKey = StorageKey::EditingCompany;
    const ORIGINAL_KEY: StorageKey = StorageKey::OriginalCompany;
    const CREATED_ID_KEY: Option<StorageKey> = Some(StorageKey::CompanyId);
    const LIST_ROUTE: &'static str = "/admin/company";

    fn allowlist() -> &'static FieldAllowlist {
        &COMPANY_FIELDS
    }

    fn check_complete(working: Option<&Value>) -> Result<(), IncompleteRecord> {
        check_company_complete(working)
    }

    fn step_route(step: CompanyStep, id: Option<i64>) -> String {
        match id {
            Some(id) => format!("/admin/company/edit/{}/{}", id, step.key()),
            None => format!("/admin/company/add/{}", step.key()),
        }
    }
}

pub struct CustomerEdit;

impl EditableEntity for CustomerEdit {
    type Step = CustomerTab;
    type Model = CustomerModel;

    const NAME: &'static str = "customer";
    const TITLE: &'static str = "Customer";
    const EDITING_KEY: StorageKey = StorageKey::EditingCustomer;
    const ORIGINAL_KEY: StorageKey = StorageKey::OriginalCustomer;
    const CREATED_ID_KEY: Option<StorageKey> = None;
    const LIST_ROUTE: &'static str = "/admin/customers";

    fn allowlist() -> &'static FieldAllowlist {
        &CUSTOMER_FIELDS
    }

    fn diff_options() -> DiffOptions {
        DiffOptions { blank_as_absent: true }
    }

    /// Tabs share one page, so the route does not carry the tab
    fn step_route(_tab: CustomerTab, id: Option<i64>) -> String {
        match id {
            Some(id) => format!("/admin/customers/edit/{}", id),
            None => "/admin/customers/add".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_routes() {
        assert_eq!(
            CompanyEdit::step_route(CompanyStep::FinancialSettings, Some(4)),
            "/admin/company/edit/4/step-3"
        );
        assert_eq!(CompanyEdit::step_route(CompanyStep::BasicInfo, None), "/admin/company/add/step-1");
    }

    #[test]
    fn test_customer_compares_blanks_loosely() {
        assert!(CustomerEdit::diff_options().blank_as_absent);
        assert!(!CompanyEdit::diff_options().blank_as_absent);
        assert_eq!(CustomerEdit::check_complete(None), Ok(()));
        assert_eq!(CustomerEdit::step_route(CustomerTab::Vat, Some(3)), "/admin/customers/edit/3");
    }
}
