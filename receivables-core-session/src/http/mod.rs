pub mod backend;
pub mod company_endpoints;
pub mod customer_endpoints;

pub use backend::HttpBackend;
