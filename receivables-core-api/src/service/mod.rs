pub mod company_service;
pub mod customer_service;

pub use company_service::*;
pub use customer_service::*;
