/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Brime Client
//!
//! Asynchronous client for the Brime livestreaming REST API.
//!
//! Every remote endpoint is exposed as one async method returning the decoded
//! JSON body as a [`serde_json::Value`]. Requests are authenticated with a
//! static client token, forwarded as the `client_id` query parameter.
//!
//! ## Example
//! ```ignore
//! use brime_client::prelude::*;
//!
//! let config = Config::with_client_id("my-client-id");
//! let client = Client::new(config)?;
//!
//! let channel = client.channel("geeken").await?;
//! let clips = client
//!     .channel_clips("abc123", &ClipsRequest::default().with_limit(10))
//!     .await?;
//!
//! client.close();
//! ```

/// Application layer: configuration, service interfaces and the client
pub mod application;

/// Library constants
pub mod constants;

/// Error type used across the crate
pub mod error;

/// Endpoint, request and transport models
pub mod model;

/// Commonly used re-exports
pub mod prelude;

/// Environment and logging helpers
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
