//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the order use case.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};

use crate::application::ManageOrdersUseCase;
use crate::domain::orders::OrderStore;
use crate::domain::shared::OrderId;
use crate::error::ApiError;

use super::request::{CreateOrderRequest, UpdateOrderRequest};
use super::response::{HealthResponse, OrderResponse};

/// Application state shared across handlers.
pub struct AppState<S>
where
    S: OrderStore,
{
    /// Order use case.
    pub orders: Arc<ManageOrdersUseCase<S>>,
    /// Application version.
    pub version: String,
    /// Base URL used to build the location of created orders.
    pub public_base_url: String,
}

impl<S> AppState<S>
where
    S: OrderStore,
{
    /// Build state around a store.
    pub fn new(store: Arc<S>, version: impl Into<String>, public_base_url: impl Into<String>) -> Self {
        Self {
            orders: Arc::new(ManageOrdersUseCase::new(store)),
            version: version.into(),
            public_base_url: public_base_url.into(),
        }
    }

    fn order_location(&self, id: OrderId) -> String {
        format!("{}/orders/{id}", self.public_base_url.trim_end_matches('/'))
    }
}

impl<S> Clone for AppState<S>
where
    S: OrderStore,
{
    fn clone(&self) -> Self {
        Self {
            orders: Arc::clone(&self.orders),
            version: self.version.clone(),
            public_base_url: self.public_base_url.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: OrderStore + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<S>(State(state): State<AppState<S>>) -> impl IntoResponse
where
    S: OrderStore,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// List all orders.
async fn list_orders<S>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<OrderResponse>>, ApiError>
where
    S: OrderStore,
{
    let orders = state.orders.list().await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

/// Create an order; responds with its location.
async fn create_order<S>(
    State(state): State<AppState<S>>,
    body: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    S: OrderStore,
{
    let Json(request) = body.map_err(reject_body)?;
    let created = state.orders.create(request.into()).await?;
    let location = state.order_location(created.id);

    Ok((
        StatusCode::OK,
        [(header::LOCATION, location.clone())],
        location,
    ))
}

/// Get one order.
async fn get_order<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError>
where
    S: OrderStore,
{
    let order = state.orders.get(parse_id(&id)?).await?;
    Ok(Json(order.into()))
}

/// Replace an order's items.
async fn update_order<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateOrderRequest>, JsonRejection>,
) -> Result<&'static str, ApiError>
where
    S: OrderStore,
{
    let id = parse_id(&id)?;
    let Json(request) = body.map_err(reject_body)?;
    state.orders.update(id, request.items).await?;
    Ok("Updated")
}

/// Delete an order.
async fn delete_order<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError>
where
    S: OrderStore,
{
    state.orders.delete(parse_id(&id)?).await?;
    Ok("Order has been deleted")
}

fn parse_id(raw: &str) -> Result<OrderId, ApiError> {
    raw.parse().map_err(|_| {
        ApiError::invalid_request(format!("Invalid order id '{raw}'")).with_context("field", "orderId")
    })
}

fn reject_body(rejection: JsonRejection) -> ApiError {
    tracing::debug!(error = %rejection.body_text(), "Rejected request body");
    ApiError::invalid_request(rejection.body_text())
}
