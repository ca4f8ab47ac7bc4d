use crate::error::AppError;
use crate::model::requests::VodsRequest;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the vod service
#[async_trait]
pub trait VodService: Send + Sync {
    /// Returns information about a vod
    ///
    /// The route depends on `Config::vod_info_route`. The legacy route,
    /// which is the default, points at a channel path rather than a vod
    /// path; see [`VodInfoRoute`](crate::application::config::VodInfoRoute).
    async fn vod_info(&self, vod_id: &str) -> Result<Value, AppError>;

    /// Lists the vods of a channel
    ///
    /// # Arguments
    /// * `channel_id` - Alphanumeric ID of the channel
    /// * `request` - Pagination parameters; `VodsRequest::default()` gives
    ///   `limit=50`, `skip=0`, `sort=desc`
    async fn channel_vods(
        &self,
        channel_id: &str,
        request: &VodsRequest,
    ) -> Result<Value, AppError>;
}
