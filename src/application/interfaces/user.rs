use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for user lookups
///
/// All user endpoints require special access on the Brime side.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Returns the user's information
    async fn user(&self, username: &str) -> Result<Value, AppError>;

    /// Returns the channels a user follows
    async fn user_following(&self, username: &str) -> Result<Value, AppError>;

    /// Returns the clips a user has created
    async fn user_clips(&self, username: &str) -> Result<Value, AppError>;

    /// Returns the total number of registered users
    async fn users(&self) -> Result<Value, AppError>;
}
