use std::str::FromStr;

use super::step::WizardStep;

/// Steps of the company onboarding / edit wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyStep {
    BasicInfo,
    Address,
    FinancialSettings,
    BanksAndPayments,
    Complete,
}

impl WizardStep for CompanyStep {
    const SEQUENCE: &'static [Self] = &[
        CompanyStep::BasicInfo,
        CompanyStep::Address,
        CompanyStep::FinancialSettings,
        CompanyStep::BanksAndPayments,
        CompanyStep::Complete,
    ];
    const ALL: &'static [Self] = Self::SEQUENCE;

    fn first() -> Self {
        CompanyStep::BasicInfo
    }

    fn key(&self) -> &'static str {
        match self {
            CompanyStep::BasicInfo => "step-1",
            CompanyStep::Address => "step-2",
            CompanyStep::FinancialSettings => "step-3",
            CompanyStep::BanksAndPayments => "step-4",
            CompanyStep::Complete => "complete",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CompanyStep::BasicInfo => "Basic Info",
            CompanyStep::Address => "Company Address",
            CompanyStep::FinancialSettings => "Financial AR Settings",
            CompanyStep::BanksAndPayments => "Banks & Payments",
            CompanyStep::Complete => "Complete",
        }
    }
}

impl std::fmt::Display for CompanyStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CompanyStep {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or(())
    }
}
