//! Common test utilities for Reddit API tests.

use snoo::RedditClient;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a client pointed at the mock server.
pub fn client_for(server: &MockServer) -> RedditClient {
    RedditClient::builder()
        .url(server.uri())
        .access_token("test-token")
        .build()
        .unwrap()
}

/// Create a listing response from `(kind, data)` pairs.
pub fn mock_listing(children: &[(&str, serde_json::Value)]) -> ResponseTemplate {
    let children: Vec<_> = children
        .iter()
        .map(|(kind, data)| serde_json::json!({ "kind": kind, "data": data }))
        .collect();

    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "kind": "Listing",
        "data": {
            "dist": children.len(),
            "children": children,
            "after": null,
            "before": null
        }
    }))
}

/// Create an empty `{}` response, as returned by the toggle endpoints.
#[allow(dead_code)] // Not all test files use this
pub fn mock_empty() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({}))
}

/// Expect exactly one form POST to `endpoint` with exactly `body`.
#[allow(dead_code)]
pub async fn mock_form(server: &MockServer, endpoint: &str, body: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(body))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// Fail the test if the server receives any request at all.
#[allow(dead_code)]
pub async fn expect_no_requests(server: &MockServer) {
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}
