use async_trait::async_trait;

/// Storage trait for wiping every entry, used on sign-out
#[async_trait]
pub trait ClearEntries: Send + Sync {
    async fn clear(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
