use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for emote lookups
#[async_trait]
pub trait EmoteService: Send + Sync {
    /// Returns all globally enabled emotes
    async fn global_emotes(&self) -> Result<Value, AppError>;

    /// Returns the emotes of a named set
    async fn emote_set(&self, emote_set: &str) -> Result<Value, AppError>;

    /// Returns the emotes of a channel
    async fn channel_emotes(&self, channel: &str) -> Result<Value, AppError>;
}
