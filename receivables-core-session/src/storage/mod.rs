pub mod file_storage;
pub mod in_memory_storage;

pub use file_storage::FileStorage;
pub use in_memory_storage::InMemoryStorage;
