use super::clear::ClearEntries;
use super::load::LoadEntry;
use super::remove::RemoveEntry;
use super::store::StoreEntry;

/// Persistent key-value storage backing a client session
///
/// Implemented automatically for every type providing all four operations.
pub trait SessionStorage: LoadEntry + StoreEntry + RemoveEntry + ClearEntries {}

impl<T> SessionStorage for T where T: LoadEntry + StoreEntry + RemoveEntry + ClearEntries {}
