pub mod step;
pub mod company_step;
pub mod customer_tab;
pub mod progress;

pub use company_step::CompanyStep;
pub use customer_tab::CustomerTab;
pub use progress::WizardProgress;
pub use step::WizardStep;
