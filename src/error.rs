/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::fmt;

/// Errors surfaced by the Brime client
///
/// The client adds no classification of its own: transport failures and
/// JSON decode failures are passed through as they come from `reqwest` and
/// `serde_json`. HTTP status codes are never turned into errors.
#[derive(Debug)]
pub enum AppError {
    /// Connection, TLS or body-read failure
    Network(reqwest::Error),
    /// Response body was not valid JSON, or did not fit the requested type
    Json(serde_json::Error),
    /// Base URL could not be parsed or cannot carry path segments
    InvalidUrl(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::InvalidUrl(msg) => write!(f, "invalid url: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::InvalidUrl(_) => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

