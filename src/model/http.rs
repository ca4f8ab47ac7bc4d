/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::{Config, PostVerb};
use crate::constants::{CLIENT_ID_PARAM, USER_AGENT};
use crate::error::AppError;
use crate::model::endpoint::{Endpoint, RequestKind, Route};
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Transport layer of the Brime client
///
/// Owns the HTTP session and turns an [`Endpoint`] plus query parameters into
/// a request. Responses are decoded as JSON regardless of their status code.
pub struct HttpClient {
    session: Client,
    config: Config,
}

impl HttpClient {
    /// Creates a transport with a fresh session built from the configuration
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Ready to send requests
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let session = builder.build()?;
        Ok(Self::with_session(config, session))
    }

    /// Creates a transport on top of an existing session
    ///
    /// The session is used as-is; `Config::timeout` is not applied to it.
    pub fn with_session(config: Config, session: Client) -> Self {
        Self { session, config }
    }

    /// Gets the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the underlying session
    pub fn session(&self) -> &Client {
        &self.session
    }

    /// Verb an endpoint is sent with under the current configuration
    pub fn method_for(&self, endpoint: &Endpoint<'_>) -> Method {
        match endpoint.kind() {
            RequestKind::Read => Method::GET,
            RequestKind::Mutation => self.mutation_method(),
        }
    }

    /// Full URL of an endpoint, with `client_id` and the extra query pairs
    pub fn url_for(
        &self,
        endpoint: &Endpoint<'_>,
        query: &[(&str, String)],
    ) -> Result<Url, AppError> {
        build_url(&self.config.base_url, endpoint, &self.config.client_id, query)
    }

    /// Sends an endpoint with the verb its kind calls for
    pub async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint<'_>,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        self.request(self.method_for(endpoint), endpoint, query)
            .await
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint<'_>,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        self.request(Method::GET, endpoint, query).await
    }

    /// Makes a mutating request with an empty body
    ///
    /// Uses the verb selected by `Config::post_verb`.
    pub async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint<'_>,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        self.request(self.mutation_method(), endpoint, query)
            .await
    }

    /// Makes a request with an explicit verb
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &Endpoint<'_>,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let url = self.url_for(endpoint, query)?;
        let response = make_http_request(&self.session, method, url).await?;
        parse_response(response).await
    }

    fn mutation_method(&self) -> Method {
        match self.config.post_verb {
            PostVerb::Post => Method::POST,
            PostVerb::Get => Method::GET,
        }
    }
}

/// Builds the full URL of an endpoint
///
/// Identifiers are appended as single, percent-encoded path segments, so
/// `/`, `?`, `#` or spaces in an identifier never change the URL structure.
/// Suffix routes are encoded the same way before being glued onto the base.
/// `client_id` is always the first query parameter, followed by `query` in
/// order.
///
/// # Example
/// ```
/// use brime_client::model::endpoint::Endpoint;
/// use brime_client::model::http::build_url;
///
/// let url = build_url(
///     "https://api-staging.brimelive.com/v1",
///     &Endpoint::Channel("geeken"),
///     "token",
///     &[],
/// )
/// .unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://api-staging.brimelive.com/v1/channel/geeken?client_id=token"
/// );
/// ```
pub fn build_url(
    base_url: &str,
    endpoint: &Endpoint<'_>,
    client_id: &str,
    query: &[(&str, String)],
) -> Result<Url, AppError> {
    let mut url = match endpoint.route() {
        Route::Segments(segments) => {
            let mut url = parse_url(base_url)?;
            url.path_segments_mut()
                .map_err(|_| AppError::InvalidUrl(format!("{base_url} cannot be a base")))?
                .pop_if_empty()
                .extend(segments);
            url
        }
        Route::Suffix(segments) => {
            parse_url(&format!("{base_url}{}", encode_segments(&segments)?))?
        }
    };

    url.query_pairs_mut()
        .append_pair(CLIENT_ID_PARAM, client_id)
        .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));

    Ok(url)
}

/// Percent-encodes segments with the same set `path_segments_mut` applies
/// and joins them with `/`
fn encode_segments(segments: &[&str]) -> Result<String, AppError> {
    let mut scratch = parse_url("https://localhost/")?;
    scratch
        .path_segments_mut()
        .map_err(|_| AppError::InvalidUrl("scratch url cannot be a base".to_string()))?
        .clear()
        .extend(segments);
    let path = scratch.path();
    Ok(path.strip_prefix('/').unwrap_or(path).to_string())
}

fn parse_url(raw: &str) -> Result<Url, AppError> {
    Url::parse(raw).map_err(|e| AppError::InvalidUrl(format!("{raw}: {e}")))
}

/// Sends one request on the shared session
///
/// Only the path is logged; the query string carries the client token.
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: Url,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url.path());
    let response = client.request(method, url).send().await?;
    debug!("Response status: {}", response.status());
    Ok(response)
}

/// Reads the whole body and decodes it as JSON, whatever the status code
async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
