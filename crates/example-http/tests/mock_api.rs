//! Mock API tests for the reqwest transport.
//!
//! These tests use wiremock to simulate the Example API and exercise the
//! client end-to-end over real HTTP without network access.

use std::time::Duration;

use example_http::{
    ClientConfig, Error, ExampleClient, HttpClient, ReqwestTransport, StatusPolicy,
    TransportError, USER_AGENT,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_client(server: &MockServer) -> HttpClient {
    example_http::client("test-key", &server.uri()).unwrap()
}

/// Returns a base URL on which nothing is listening.
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

// ============================================================================
// fetch_items
// ============================================================================

#[tokio::test]
async fn test_fetch_items_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["a", "b"])))
        .expect(1)
        .mount(&server)
        .await;

    let items = mock_client(&server).fetch_items().await.unwrap();

    assert_eq!(items, vec!["a".to_string(), "b".to_string()]);
}

#[tokio::test]
async fn test_fetch_items_sends_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let items = mock_client(&server).fetch_items().await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_fetch_items_keeps_base_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["nested"])))
        .expect(1)
        .mount(&server)
        .await;

    let client = example_http::client("k", &format!("{}/v1/", server.uri())).unwrap();
    let items = client.fetch_items().await.unwrap();

    assert_eq!(items, vec!["nested".to_string()]);
}

#[tokio::test]
async fn test_fetch_items_non_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html>not json</html>")
                .insert_header("content-type", "text/html"),
        )
        .mount(&server)
        .await;

    let err = mock_client(&server).fetch_items().await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_fetch_items_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = mock_client(&server).fetch_items().await.unwrap_err();
    assert!(matches!(err, Error::NoData));
}

// ============================================================================
// submit_item
// ============================================================================

#[tokio::test]
async fn test_submit_item_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submit"))
        .and(header("authorization", "Bearer test-key"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "item": "x" })))
        .respond_with(ResponseTemplate::new(200).set_body_string("received x"))
        .expect(1)
        .mount(&server)
        .await;

    let reply = mock_client(&server).submit_item("x").await.unwrap();

    assert_eq!(reply, "received x");
}

#[tokio::test]
async fn test_submit_item_invalid_utf8() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submit"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xFE]))
        .mount(&server)
        .await;

    let err = mock_client(&server).submit_item("x").await.unwrap_err();
    assert!(matches!(err, Error::InvalidResponse(_)));
}

#[tokio::test]
async fn test_submit_item_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submit"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let err = mock_client(&server).submit_item("x").await.unwrap_err();
    assert!(matches!(err, Error::NoData));
}

// ============================================================================
// Status handling
// ============================================================================

#[tokio::test]
async fn test_error_status_with_body_is_decoded_by_default() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submit"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let reply = mock_client(&server).submit_item("x").await.unwrap();
    assert_eq!(reply, "Internal Server Error");
}

#[tokio::test]
async fn test_require_success_rejects_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    let config = ClientConfig::with_base_url("wrong-key", &server.uri())
        .unwrap()
        .with_status_policy(StatusPolicy::RequireSuccess);
    let client = example_http::client_from_config(config).unwrap();

    let err = client.fetch_items().await.unwrap_err();
    assert!(matches!(err, Error::Status { status: 401, .. }));
    assert!(err.to_string().contains("401"));
}

// ============================================================================
// Transport failures
// ============================================================================

#[tokio::test]
async fn test_connection_refused_fetch() {
    let client = example_http::client("k", &closed_port_url()).unwrap();

    let err = client.fetch_items().await.unwrap_err();
    let Error::Network(transport) = &err else {
        panic!("expected Network, got {err:?}");
    };
    assert!(matches!(transport, TransportError::Connection(_)));
    assert!(transport.inner().downcast_ref::<reqwest::Error>().is_some());
}

#[tokio::test]
async fn test_connection_refused_submit() {
    let client = example_http::client("k", &closed_port_url()).unwrap();

    let err = client.submit_item("x").await.unwrap_err();
    assert!(err.is_network());
    assert!(std::error::Error::source(&err).is_some());
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!(["late"]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let transport = ReqwestTransport::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let client = ExampleClient::with_base_url(transport, "k", &server.uri()).unwrap();

    let err = client.fetch_items().await.unwrap_err();
    assert!(matches!(err, Error::Network(TransportError::Timeout(_))));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_malformed_base_url() {
    let result = example_http::client("k", "not a url");
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}
