/// Default base URL of the Brime REST API (staging, version 1)
pub const DEFAULT_BASE_URL: &str = "https://api-staging.brimelive.com/v1";
/// User agent string used in HTTP requests to identify this client to the Brime API
pub const USER_AGENT: &str = concat!("brime-client/", env!("CARGO_PKG_VERSION"));
/// Name of the query parameter carrying the client token
pub const CLIENT_ID_PARAM: &str = "client_id";
/// Default epoch timestamp for the `since` filter
pub const DEFAULT_SINCE: f64 = 0.0;
/// Default page size for listing endpoints
pub const DEFAULT_LIMIT: u32 = 50;
/// Largest page size documented by the API.
///
/// The client does not enforce it; larger values are passed through and the
/// server decides what to do with them.
pub const MAX_LIMIT: u32 = 150;
/// Default number of entries to skip in listing endpoints
pub const DEFAULT_SKIP: u32 = 0;
