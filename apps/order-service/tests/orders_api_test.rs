//! End-to-end tests for the order REST API.
//!
//! Drives the router with `oneshot` requests against a real SQLite store.

// Allow unwrap in tests - tests should panic on unexpected errors
#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use order_service::config::load_config_from_string;
use order_service::infrastructure::http::OrderResponse;
use order_service::{AppState, SqliteOrderStore, create_router};

// =============================================================================
// Helpers
// =============================================================================

async fn sqlite_app() -> Router {
    let store = SqliteOrderStore::in_memory().await.unwrap();
    store.ensure_schema().await.unwrap();
    create_router(AppState::new(
        Arc::new(store),
        "test",
        "http://localhost:8080",
    ))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn list(app: &Router) -> Vec<OrderResponse> {
    let (status, body) = send(app, "GET", "/orders", None).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn create_and_list_scenario() {
    let app = sqlite_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/orders",
        Some(json!({
            "items": "Widget",
            "orderDate": "2023-01-01",
            "orderTime": "10:00",
            "quantity": 5,
            "onHand": true
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), "http://localhost:8080/orders/1");

    send(
        &app,
        "POST",
        "/orders",
        Some(json!({"items": "Gizmo", "orderDate": "2022-12-31"})),
    )
    .await;

    let orders = list(&app).await;
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].items.as_deref(), Some("Gizmo"));
    assert_eq!(orders[1].order_id, 1);

    let (status, body) = send(&app, "GET", "/orders/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json,
        json!({
            "orderId": 1,
            "items": "Widget",
            "orderDate": "2023-01-01",
            "orderTime": "10:00:00",
            "quantity": 5,
            "onHand": true
        })
    );
}

#[tokio::test]
async fn location_header_matches_body() {
    let app = sqlite_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/orders")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"items":"Widget"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    let location = response.headers().get(header::LOCATION).cloned().unwrap();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(location.as_bytes(), &body[..]);
}

#[tokio::test]
async fn legacy_field_names_accepted() {
    let app = sqlite_app().await;

    send(
        &app,
        "POST",
        "/orders",
        Some(json!({"items": "Widget", "localD": "2024-02-29", "localT": "23:59"})),
    )
    .await;

    let orders = list(&app).await;
    assert_eq!(
        orders[0].order_date.map(|d| d.to_string()).as_deref(),
        Some("2024-02-29")
    );
}

#[tokio::test]
async fn update_only_changes_items() {
    let app = sqlite_app().await;
    send(
        &app,
        "POST",
        "/orders",
        Some(json!({"items": "Widget", "orderDate": "2023-01-01", "quantity": 5, "onHand": false})),
    )
    .await;

    let (status, body) = send(
        &app,
        "PUT",
        "/orders/1",
        Some(json!({"items": "Gadget", "quantity": 99})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Updated");

    let orders = list(&app).await;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].items.as_deref(), Some("Gadget"));
    assert_eq!(orders[0].quantity, Some(5));
    assert_eq!(orders[0].on_hand, Some(false));
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let app = sqlite_app().await;
    send(&app, "POST", "/orders", Some(json!({"items": "Widget"}))).await;

    let (status, body) = send(&app, "DELETE", "/orders/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Order has been deleted");

    let (status, body) = send(&app, "GET", "/orders/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], "ORDER_NOT_FOUND");

    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let app = sqlite_app().await;
    send(&app, "POST", "/orders", Some(json!({}))).await;
    send(&app, "DELETE", "/orders/1", None).await;

    let (_, body) = send(&app, "POST", "/orders", Some(json!({}))).await;

    assert!(String::from_utf8(body).unwrap().ends_with("/orders/2"));
}

#[tokio::test]
async fn missing_ids_are_404_for_update_and_delete() {
    let app = sqlite_app().await;

    let (status, _) = send(&app, "PUT", "/orders/5", Some(json!({"items": "x"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/orders/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn validation_failures_are_400() {
    let app = sqlite_app().await;

    for body in [
        json!({"items": ""}),
        json!({"items": "x".repeat(256)}),
        json!({"quantity": -2}),
        json!({"orderTime": "noon"}),
    ] {
        let (status, _) = send(&app, "POST", "/orders", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
    }

    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn missing_table_is_500() {
    let store = SqliteOrderStore::in_memory().await.unwrap();
    let app = create_router(AppState::new(Arc::new(store), "test", "http://localhost"));

    let (status, body) = send(&app, "GET", "/orders", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], "STORAGE_FAILURE");
}

#[tokio::test]
async fn file_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}/orders.db", dir.path().display());

    {
        let store = SqliteOrderStore::connect(&url).await.unwrap();
        store.ensure_schema().await.unwrap();
        let app = create_router(AppState::new(Arc::new(store), "test", "http://localhost"));
        send(&app, "POST", "/orders", Some(json!({"items": "Widget"}))).await;
    }

    let store = SqliteOrderStore::connect(&url).await.unwrap();
    store.ensure_schema().await.unwrap();
    let app = create_router(AppState::new(Arc::new(store), "test", "http://localhost"));

    let orders = list(&app).await;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].items.as_deref(), Some("Widget"));
}

#[test]
fn sample_config_parses() {
    let yaml = include_str!("../config.yaml");
    let config = load_config_from_string(yaml).unwrap();
    assert_eq!(config.observability.tracing.service_name, "order-service");
}
