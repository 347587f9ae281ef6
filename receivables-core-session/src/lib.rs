//! Client-side session state for the receivables front-end: edit sessions with
//! snapshot diffing, wizard progression, route guards, user context and the
//! REST backend client.

pub mod auth;
pub mod client_repositories;
pub mod company_selection;
pub mod config;
pub mod directory;
pub mod edit;
pub mod error;
pub mod guard;
pub mod http;
pub mod notify;
pub mod snapshot;
pub mod storage;
pub mod wizard;

pub use client_repositories::ClientRepositories;
pub use config::ClientConfig;
pub use error::{SessionError, SessionResult};

#[cfg(test)]
pub mod test_helper;
