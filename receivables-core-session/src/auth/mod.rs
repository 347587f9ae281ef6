pub mod auth_session;
pub mod capability;
pub mod user_context;

pub use auth_session::AuthSession;
pub use capability::CapabilitySet;
pub use user_context::{build_context, UserContextStore};
