pub mod envelope;
pub mod paginated;
pub mod permission;

pub use envelope::*;
pub use paginated::*;
pub use permission::*;
