pub mod repo_impl;
pub mod load;
pub mod store;
pub mod remove;
pub mod clear;

pub use repo_impl::InMemoryStorage;
