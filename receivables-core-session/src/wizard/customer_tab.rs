use std::str::FromStr;

use super::step::WizardStep;

/// Tabs of the customer add / edit form
///
/// A new customer is saved through main, address, EFT, VAT and dunning; cash
/// application and statement preferences are only reachable when editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerTab {
    Main,
    Address,
    Application,
    Statement,
    Eft,
    Vat,
    Dunning,
}

impl WizardStep for CustomerTab {
    const SEQUENCE: &'static [Self] = &[
        CustomerTab::Main,
        CustomerTab::Address,
        CustomerTab::Eft,
        CustomerTab::Vat,
        CustomerTab::Dunning,
    ];
    const ALL: &'static [Self] = &[
        CustomerTab::Main,
        CustomerTab::Address,
        CustomerTab::Application,
        CustomerTab::Statement,
        CustomerTab::Eft,
        CustomerTab::Vat,
        CustomerTab::Dunning,
    ];

    fn first() -> Self {
        CustomerTab::Main
    }

    fn key(&self) -> &'static str {
        match self {
            CustomerTab::Main => "main",
            CustomerTab::Address => "address",
            CustomerTab::Application => "application",
            CustomerTab::Statement => "statement",
            CustomerTab::Eft => "eft",
            CustomerTab::Vat => "vat",
            CustomerTab::Dunning => "dunning",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CustomerTab::Main => "Basic Info",
            CustomerTab::Address => "Address",
            CustomerTab::Application => "Application",
            CustomerTab::Statement => "Statement",
            CustomerTab::Eft => "EFT",
            CustomerTab::Vat => "VAT",
            CustomerTab::Dunning => "Dunning / Credit",
        }
    }
}

impl std::fmt::Display for CustomerTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CustomerTab {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_unlocks_eft() {
        assert_eq!(CustomerTab::Address.next(), Some(CustomerTab::Eft));
        assert_eq!(CustomerTab::Dunning.next(), None);
        assert_eq!(CustomerTab::Statement.next(), None);
    }

    #[test]
    fn test_every_tab_has_a_key() {
        for tab in CustomerTab::ALL {
            assert_eq!(tab.key().parse::<CustomerTab>(), Ok(*tab));
        }
    }
}
