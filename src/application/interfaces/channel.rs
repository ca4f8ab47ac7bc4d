use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for channel lookups
#[async_trait]
pub trait ChannelService: Send + Sync {
    /// Returns the channel's information
    ///
    /// # Arguments
    /// * `channel` - Username of the channel
    async fn channel(&self, channel: &str) -> Result<Value, AppError>;

    /// Returns the channel's subscribers
    async fn channel_subs(&self, channel: &str) -> Result<Value, AppError>;
}
