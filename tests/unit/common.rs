// Common utilities for unit tests

use brime_client::prelude::*;
use mockito::{Matcher, Mock, ServerGuard};

/// Client token used by every test client
pub const TOKEN: &str = "test_token";

/// Base URL pointing at the mock server, versioned like the real API
pub fn base_url(server: &ServerGuard) -> String {
    format!("{}/v1", server.url())
}

/// Default test configuration against the mock server
pub fn test_config(server: &ServerGuard) -> Config {
    Config::new(base_url(server), TOKEN)
}

/// Creates a client against the mock server
pub fn test_client(server: &ServerGuard) -> Client {
    Client::new(test_config(server)).expect("client should build")
}

/// Matches requests carrying the test token
pub fn client_id() -> Matcher {
    Matcher::UrlEncoded("client_id".into(), TOKEN.into())
}

/// Mocks an endpoint answering 200 with a JSON body
pub async fn mock_json(server: &mut ServerGuard, method: &str, path: &str, body: &str) -> Mock {
    server
        .mock(method, path)
        .match_query(client_id())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}
