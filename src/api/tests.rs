//! Tests for the order API module

use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> HttpOrderApi {
    let config = ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    };
    HttpOrderApi::from_config(&config).unwrap()
}

fn order_json(uid: &str) -> serde_json::Value {
    json!({
        "order_uid": uid,
        "track_number": "WBILMTESTTRACK",
        "entry": "WBIL",
        "locale": "en",
        "customer_id": "test",
        "delivery_service": "meest",
        "shardkey": "9",
        "sm_id": 99,
        "date_created": "2021-11-26T06:22:19Z",
        "oof_shard": "1"
    })
}

#[tokio::test]
async fn test_get_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders/b563feb7b2b84b6test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_json("b563feb7b2b84b6test")))
        .expect(1)
        .mount(&server)
        .await;

    let order = api_for(&server)
        .get_order("b563feb7b2b84b6test")
        .await
        .unwrap();

    assert_eq!(order.order_uid, "b563feb7b2b84b6test");
    assert_eq!(order.delivery_service, "meest");
    assert_eq!(order.sm_id, 99);
}

#[tokio::test]
async fn test_get_order_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"status": 404, "message": "Order not found"})),
        )
        .mount(&server)
        .await;

    let err = api_for(&server).get_order("missing").await.unwrap_err();
    assert!(matches!(err, Error::Lookup { .. }));
    assert_eq!(
        err.to_string(),
        "Order not found (status: 404): Order not found"
    );
}

#[tokio::test]
async fn test_get_order_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"order_uid": 5})))
        .mount(&server)
        .await;

    let err = api_for(&server).get_order("broken").await.unwrap_err();
    assert!(matches!(err, Error::Lookup { .. }));
    assert!(err.to_string().starts_with("Failed to load order: Failed to parse JSON"));
}

#[tokio::test]
async fn test_get_order_encodes_uid() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders/a%20b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_json("a b")))
        .expect(1)
        .mount(&server)
        .await;

    let order = api_for(&server).get_order("a b").await.unwrap();
    assert_eq!(order.order_uid, "a b");
}

#[tokio::test]
async fn test_get_items_sends_cursor_and_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders/ORDER1/items"))
        .and(query_param("last_id", "40"))
        .and(query_param("limit", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 50, "name": "Mascaras", "price": 453, "size": "0", "brand": "Vivienne Sabo"},
            {"id": 60, "name": "Lipstick", "price": 120, "size": "1", "brand": "Acme"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let items = api_for(&server).get_items("ORDER1", 40, 4).await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, 50);
    assert_eq!(items[1].brand, "Acme");
}

#[tokio::test]
async fn test_get_items_null_body_is_empty_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders/ORDER1/items"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string("null"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let items = api_for(&server).get_items("ORDER1", 40, 4).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_get_items_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders/ORDER1/items"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let err = api_for(&server).get_items("ORDER1", 0, 4).await.unwrap_err();
    assert!(matches!(err, Error::PageFetch { .. }));
    assert_eq!(err.to_string(), "Failed to load items (status: 500)");
}

#[tokio::test]
async fn test_connection_refused_is_page_fetch_error() {
    let config = ClientConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 2,
        ..ClientConfig::default()
    };
    let api = HttpOrderApi::from_config(&config).unwrap();

    let err = api.get_items("ORDER1", 0, 4).await.unwrap_err();
    assert!(matches!(err, Error::PageFetch { .. }));
    assert!(err.to_string().starts_with("Failed to load items: "));
}
