use crate::constants::DEFAULT_BASE_URL;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, error};

/// Which route `vod_info` requests are sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VodInfoRoute {
    /// `channel/{vod_id}` appended to the base URL without a separator,
    /// sent with the mutation verb
    #[default]
    Legacy,
    /// `GET /vod/{vod_id}`
    Vod,
}

impl FromStr for VodInfoRoute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(VodInfoRoute::Legacy),
            "vod" => Ok(VodInfoRoute::Vod),
            other => Err(format!("unknown vod info route: {other}")),
        }
    }
}

/// HTTP verb used for mutating endpoints such as clip creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostVerb {
    /// Real POST with an empty body
    #[default]
    Post,
    /// GET, as older releases of the client sent
    Get,
}

impl FromStr for PostVerb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "post" => Ok(PostVerb::Post),
            "get" => Ok(PostVerb::Get),
            other => Err(format!("unknown post verb: {other}")),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the Brime API client
pub struct Config {
    /// Base URL of the REST API, including the version path
    pub base_url: String,
    /// Client token, sent as `client_id` on every request
    pub client_id: String,
    /// Route used by `vod_info`
    pub vod_info_route: VodInfoRoute,
    /// Verb used by mutating endpoints
    pub post_verb: PostVerb,
    /// Request timeout in seconds. `None` leaves the HTTP client default
    pub timeout: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Config {
    /// Creates a configuration for the given base URL and client token
    pub fn new(base_url: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client_id: client_id.into(),
            vod_info_route: VodInfoRoute::default(),
            post_verb: PostVerb::default(),
            timeout: None,
        }
    }

    /// Creates a configuration against the default staging API
    pub fn with_client_id(client_id: impl Into<String>) -> Self {
        Self::new(DEFAULT_BASE_URL, client_id)
    }

    /// Reads the configuration from the environment, loading `.env` first
    ///
    /// Recognised variables: `BRIME_BASE_URL`, `BRIME_CLIENT_ID`,
    /// `BRIME_TIMEOUT`, `BRIME_VOD_ROUTE` (`legacy` or `vod`) and
    /// `BRIME_POST_VERB` (`post` or `get`).
    pub fn from_env() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let client_id = get_env_or_default("BRIME_CLIENT_ID", String::from("default_client_id"));
        if client_id == "default_client_id" {
            error!("BRIME_CLIENT_ID not found in environment variables or .env file");
        }

        Config {
            base_url: get_env_or_default("BRIME_BASE_URL", String::from(DEFAULT_BASE_URL)),
            client_id,
            vod_info_route: get_env_or_default("BRIME_VOD_ROUTE", VodInfoRoute::default()),
            post_verb: get_env_or_default("BRIME_POST_VERB", PostVerb::default()),
            timeout: get_env_or_none("BRIME_TIMEOUT"),
        }
    }

    /// Selects the route used by `vod_info`
    #[must_use]
    pub fn with_vod_info_route(mut self, route: VodInfoRoute) -> Self {
        self.vod_info_route = route;
        self
    }

    /// Selects the verb used by mutating endpoints
    #[must_use]
    pub fn with_post_verb(mut self, verb: PostVerb) -> Self {
        self.post_verb = verb;
        self
    }

    /// Sets a request timeout in seconds
    #[must_use]
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }
}
