use serde::de::DeserializeOwned;
use serde::Serialize;

use super::load::LoadEntry;
use super::storage_key::StorageKey;
use super::store::StoreEntry;

/// Read and parse a JSON entry
///
/// A missing or malformed entry is treated as "nothing cached": the parse
/// failure is logged and `Ok(None)` returned. Only failures of the backing
/// store itself are errors.
pub async fn load_json<T, S>(
    storage: &S,
    key: StorageKey,
) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>
where
    T: DeserializeOwned,
    S: LoadEntry + ?Sized,
{
    let Some(raw) = storage.load(key).await? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            tracing::warn!(key = %key, error = %err, "discarding malformed cached entry");
            Ok(None)
        }
    }
}

/// Serialize a value as JSON and store it
pub async fn store_json<T, S>(
    storage: &S,
    key: StorageKey,
    value: &T,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    T: Serialize + ?Sized,
    S: StoreEntry + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    storage.store(key, raw).await
}

/// Read a `"true"` / `"false"` session flag; anything else is `false`
pub async fn load_flag<S>(
    storage: &S,
    key: StorageKey,
) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>
where
    S: LoadEntry + ?Sized,
{
    Ok(storage.load(key).await?.as_deref() == Some("true"))
}
