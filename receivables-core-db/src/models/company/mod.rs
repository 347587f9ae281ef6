pub mod common_enums;
pub mod company;
pub mod company_address;
pub mod financial_settings;
pub mod payment_settings;
pub mod bank_account;
pub mod company_user;

pub use common_enums::*;
pub use company::*;
pub use company_address::*;
pub use financial_settings::*;
pub use payment_settings::*;
pub use bank_account::*;
pub use company_user::*;
