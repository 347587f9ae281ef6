use std::str::FromStr;

/// Keys the client keeps in persistent session storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StorageKey {
    EditingCompany,
    OriginalCompany,
    EditingCustomer,
    OriginalCustomer,
    CompanyId,
    AllowedTabs,
    IsLoggedIn,
    SignupUserId,
    LoginToken,
    UserContext,
    HasCompanies,
    SelectedCompanyId,
}

impl StorageKey {
    pub const ALL: [StorageKey; 12] = [
        StorageKey::EditingCompany,
        StorageKey::OriginalCompany,
        StorageKey::EditingCustomer,
        StorageKey::OriginalCustomer,
        StorageKey::CompanyId,
        StorageKey::AllowedTabs,
        StorageKey::IsLoggedIn,
        StorageKey::SignupUserId,
        StorageKey::LoginToken,
        StorageKey::UserContext,
        StorageKey::HasCompanies,
        StorageKey::SelectedCompanyId,
    ];

    /// Key as written to storage
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::EditingCompany => "editingCompany",
            StorageKey::OriginalCompany => "originalCompany",
            StorageKey::EditingCustomer => "editingCustomer",
            StorageKey::OriginalCustomer => "originalCustomer",
            StorageKey::CompanyId => "companyId",
            StorageKey::AllowedTabs => "allowedTabs",
            StorageKey::IsLoggedIn => "isLoggedIn",
            StorageKey::SignupUserId => "signupUserId",
            StorageKey::LoginToken => "logintoken",
            StorageKey::UserContext => "userContext",
            StorageKey::HasCompanies => "hasCompanies",
            StorageKey::SelectedCompanyId => "selectedCompanyId",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StorageKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or(())
    }
}
