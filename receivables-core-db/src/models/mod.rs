pub mod identifiable;
pub mod timestamp;
pub mod company;
pub mod customer;
pub mod user_context;

// Re-exports
pub use identifiable::*;
pub use company::*;
pub use customer::*;
pub use user_context::*;
