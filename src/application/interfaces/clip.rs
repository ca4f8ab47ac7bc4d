use crate::error::AppError;
use crate::model::requests::ClipsRequest;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the clip service
#[async_trait]
pub trait ClipService: Send + Sync {
    /// Returns information about a clip
    ///
    /// # Arguments
    /// * `clip_id` - Alphanumeric ID of the clip
    async fn clip_info(&self, clip_id: &str) -> Result<Value, AppError>;

    /// Lists the clips of a channel
    ///
    /// # Arguments
    /// * `channel_id` - Alphanumeric ID of the channel
    /// * `request` - Pagination parameters; `ClipsRequest::default()` gives
    ///   `since=0`, `limit=50`, `skip=0`, `sort=desc`
    async fn channel_clips(
        &self,
        channel_id: &str,
        request: &ClipsRequest,
    ) -> Result<Value, AppError>;

    /// Creates a clip of the channel's current stream
    ///
    /// Sent with an empty body.
    async fn create_clip(&self, channel: &str) -> Result<Value, AppError>;
}
