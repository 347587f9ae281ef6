pub mod storage_key;
pub mod load;
pub mod store;
pub mod remove;
pub mod clear;
pub mod session_storage;
pub mod json;
pub mod pagination;

// Re-exports
pub use storage_key::*;
pub use load::*;
pub use store::*;
pub use remove::*;
pub use clear::*;
pub use session_storage::*;
pub use json::*;
pub use pagination::*;
