use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for category lookups
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// Returns all live streams grouped by category
    async fn categories(&self) -> Result<Value, AppError>;

    /// Returns the live streams of one category
    async fn category(&self, category: &str) -> Result<Value, AppError>;

    /// Returns information about a category
    async fn category_info(&self, category: &str) -> Result<Value, AppError>;
}
