//! Tests for transport behaviour shared by all actions.

mod common;

use common::{client_for, mock_empty, mock_listing, setup_mock_server};
use snoo::{Error, RedditClient};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_sends_bearer_token_and_user_agent() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/marknsfw"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("user-agent", "test:snoo:v1 (by /u/ferris)"))
        .respond_with(mock_empty())
        .expect(1)
        .mount(&server)
        .await;

    let client = RedditClient::builder()
        .url(server.uri())
        .access_token("test-token")
        .user_agent("test:snoo:v1 (by /u/ferris)")
        .build()
        .unwrap();
    client.posts().mark_nsfw("t3_x").await.unwrap();
}

#[tokio::test]
async fn test_requests_raw_json() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/info"))
        .and(query_param("raw_json", "1"))
        .and(query_param("id", "t3_a"))
        .respond_with(mock_listing(&[]))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.listings().get(&["t3_a"]).await.unwrap();
}

#[tokio::test]
async fn test_base_url_with_path_prefix() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/reddit/api/hide"))
        .respond_with(mock_empty())
        .expect(1)
        .mount(&server)
        .await;

    let client = RedditClient::builder()
        .url(format!("{}/reddit", server.uri()))
        .build()
        .unwrap();
    client.posts().hide(&["t3_a"]).await.unwrap();
}

#[tokio::test]
async fn test_non_success_status() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/spoiler"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.posts().spoiler("t3_x").await.unwrap_err();

    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "forbidden");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_success_status_without_body() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/hide"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.posts().hide(&["t3_x"]).await.unwrap_err();

    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "Service Unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_failure() {
    // Nothing listens on port 1.
    let client = RedditClient::builder()
        .url("http://127.0.0.1:1")
        .build()
        .unwrap();
    let err = client.listings().get(&["t3_a"]).await.unwrap_err();

    assert!(matches!(err, Error::Http(_)));
}

#[tokio::test]
async fn test_injected_http_client() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/unspoiler"))
        .and(header("user-agent", "injected"))
        .respond_with(mock_empty())
        .expect(1)
        .mount(&server)
        .await;

    let http = reqwest::Client::builder()
        .user_agent("injected")
        .build()
        .unwrap();
    let client = RedditClient::builder()
        .url(server.uri())
        .user_agent("ignored")
        .http_client(http)
        .build()
        .unwrap();
    client.posts().unspoiler("t3_x").await.unwrap();
}

#[tokio::test]
async fn test_concurrent_use() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/hide"))
        .respond_with(mock_empty())
        .expect(4)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let tasks: Vec<_> = ["t3_a", "t3_b", "t3_c", "t3_d"]
        .into_iter()
        .map(|id| {
            let client = client.clone();
            tokio::spawn(async move { client.posts().hide(&[id]).await })
        })
        .collect();

    for task in tasks {
        task.await.unwrap().unwrap();
    }
}
