//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use crate::types::BackoffType;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::with_config(config).unwrap()
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_retries, 0);
    assert!(config.base_url.is_none());
    assert!(config.user_agent.starts_with("order-browser/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://orders.example.com")
        .timeout(Duration::from_secs(5))
        .max_retries(2)
        .backoff(
            BackoffType::Linear,
            Duration::from_millis(200),
            Duration::from_secs(3),
        )
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(
        config.base_url,
        Some("https://orders.example.com".to_string())
    );
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.max_retries, 2);
    assert_eq!(config.backoff_type, BackoffType::Linear);
    assert_eq!(config.initial_backoff, Duration::from_millis(200));
    assert_eq!(config.max_backoff, Duration::from_secs(3));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_request_config_builder_keeps_query_order() {
    let config = RequestConfig::new()
        .query("last_id", 40)
        .query("limit", 4)
        .header("X-Request-Id", "abc123")
        .timeout(Duration::from_secs(10))
        .retries(2);

    assert_eq!(
        config.query,
        vec![
            ("last_id".to_string(), "40".to_string()),
            ("limit".to_string(), "4".to_string())
        ]
    );
    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
    assert_eq!(config.max_retries, Some(2));
}

#[test]
fn test_invalid_base_url_rejected() {
    let config = HttpClientConfig::builder().base_url("not a url").build();
    let err = HttpClient::with_config(config).unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

// ============================================================================
// Endpoint Tests
// ============================================================================

#[test]
fn test_endpoint_joins_segments() {
    let config = HttpClientConfig::builder()
        .base_url("http://localhost:8080")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let url = client.endpoint(&["api", "orders", "ORDER1", "items"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8080/api/orders/ORDER1/items");
}

#[test]
fn test_endpoint_keeps_base_prefix() {
    let config = HttpClientConfig::builder()
        .base_url("http://localhost:8080/v1/")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let url = client.endpoint(&["api", "orders"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8080/v1/api/orders");
}

#[test]
fn test_endpoint_encodes_segment() {
    let config = HttpClientConfig::builder()
        .base_url("http://localhost:8080")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let url = client.endpoint(&["api", "orders", "a/b?c"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8080/api/orders/a%2Fb%3Fc");
}

#[test]
fn test_endpoint_without_base_url() {
    let client = HttpClient::with_config(HttpClientConfig::default()).unwrap();
    assert!(matches!(
        client.endpoint(&["api"]),
        Err(Error::Config { .. })
    ));
}

// ============================================================================
// Request Tests
// ============================================================================

#[tokio::test]
async fn test_http_client_get_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": 42
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let url = client.endpoint(&["api", "data"]).unwrap();
    let data: serde_json::Value = client.get_json(url, RequestConfig::new()).await.unwrap();

    assert_eq!(data["value"], 42);
}

#[tokio::test]
async fn test_http_client_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders/ORDER1/items"))
        .and(query_param("last_id", "40"))
        .and(query_param("limit", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let url = client
        .endpoint(&["api", "orders", "ORDER1", "items"])
        .unwrap();
    let response = client
        .get_with_config(url, RequestConfig::new().query("last_id", 40).query("limit", 4))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_default_and_request_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/secure"))
        .and(header("X-API-Key", "secret123"))
        .and(header("X-Request-Id", "req-456"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .header("X-API-Key", "secret123")
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let url = client.endpoint(&["api", "secure"]).unwrap();

    let response = client
        .get_with_config(url, RequestConfig::new().header("X-Request-Id", "req-456"))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_404_keeps_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let url = client.endpoint(&["api", "missing"]).unwrap();
    let err = client
        .get_with_config(url, RequestConfig::new())
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "Not found");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_client_does_not_retry_by_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let url = client.endpoint(&["api", "flaky"]).unwrap();
    let err = client
        .get_with_config(url, RequestConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_http_client_retry_on_500_when_enabled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .max_retries(3)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(10),
            Duration::from_secs(1),
        )
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let url = client.endpoint(&["api", "flaky"]).unwrap();

    let response = client
        .get_with_config(url, RequestConfig::new())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_retries_exhausted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/always-fail"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Server error"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let url = client.endpoint(&["api", "always-fail"]).unwrap();
    let config = RequestConfig::new().retries(2);

    let err = client.get_with_config(url, config).await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_http_client_invalid_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/garbage"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let url = client.endpoint(&["api", "garbage"]).unwrap();
    let result: crate::error::Result<serde_json::Value> =
        client.get_json(url, RequestConfig::new()).await;

    assert!(matches!(result, Err(Error::JsonParse(_))));
}

// ============================================================================
// Backoff Tests
// ============================================================================

fn client_with_backoff(backoff: BackoffType, initial: Duration, max: Duration) -> HttpClient {
    let config = HttpClientConfig::builder()
        .backoff(backoff, initial, max)
        .build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_calculate_backoff_constant() {
    let client = client_with_backoff(
        BackoffType::Constant,
        Duration::from_millis(100),
        Duration::from_secs(10),
    );

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(5), Duration::from_millis(100));
}

#[test]
fn test_calculate_backoff_linear() {
    let client = client_with_backoff(
        BackoffType::Linear,
        Duration::from_millis(100),
        Duration::from_secs(10),
    );

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(2), Duration::from_millis(300));
}

#[test]
fn test_calculate_backoff_exponential_respects_max() {
    let client = client_with_backoff(
        BackoffType::Exponential,
        Duration::from_millis(100),
        Duration::from_millis(500),
    );

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(2), Duration::from_millis(400));
    assert_eq!(client.calculate_backoff(10), Duration::from_millis(500));
}

#[test]
fn test_http_client_debug() {
    let client = HttpClient::with_config(HttpClientConfig::default()).unwrap();
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(debug_str.contains("config"));
}
