/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Brime Client Prelude
//!
//! Imports the client, its configuration and every service trait, so that
//! endpoint methods are callable after a single `use`.
//!
//! ```rust
//! use brime_client::prelude::*;
//!
//! let config = Config::with_client_id("my-client-id");
//! assert_eq!(config.base_url, "https://api-staging.brimelive.com/v1");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

pub use crate::config::{Config, PostVerb, VodInfoRoute};

pub use crate::{VERSION, version};

pub use crate::constants::{DEFAULT_BASE_URL, DEFAULT_LIMIT, MAX_LIMIT};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

pub use crate::application::client::Client;

pub use crate::application::interfaces::{
    CategoryService, ChannelService, ClipService, EmoteService, StreamService, UserService,
    VodService,
};

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::endpoint::Endpoint;
pub use crate::model::http::HttpClient;
pub use crate::model::requests::{ClipsRequest, SortOrder, VodsRequest};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::setup_logger;

pub use serde_json::Value;
