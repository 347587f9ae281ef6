pub mod customer;
pub mod customer_sections;

pub use customer::*;
pub use customer_sections::*;
