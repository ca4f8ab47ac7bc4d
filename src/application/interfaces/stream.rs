use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for live stream lookups
#[async_trait]
pub trait StreamService: Send + Sync {
    /// Returns every stream currently live
    async fn streams(&self) -> Result<Value, AppError>;

    /// Returns the stream of the given channel
    ///
    /// # Arguments
    /// * `channel` - Username of the channel
    async fn stream(&self, channel: &str) -> Result<Value, AppError>;
}
