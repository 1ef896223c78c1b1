// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Order Service - Order Store and REST API
//!
//! A minimal order-management service: one `orders` table, a store contract
//! over it, and a JSON REST gateway in front.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: `Order`, `NewOrder`, `ItemsPatch`, the `OrderStore` port and
//!   its `StoreError` taxonomy
//!
//! - **Application**: request validation and `ManageOrdersUseCase`
//!
//! - **Infrastructure**: Adapters
//!   - `persistence`: SQLite (`SQLx`) and in-memory stores
//!   - `http`: Axum router mapping store errors to status codes
//!
//! Cross-cutting: `config` (YAML with env interpolation), `observability`
//! (tracing subscriber, OTLP export, Prometheus metrics) and `error`
//! (API error bodies).

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Order model and store contract.
pub mod domain;

/// Application layer - Validation and use cases.
pub mod application;

/// Infrastructure layer - Store adapters and HTTP.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// Configuration loading.
pub mod config;

/// HTTP error mapping.
pub mod error;

/// Logging, tracing and metrics.
pub mod observability;

// =============================================================================
// Re-exports
// =============================================================================

pub use application::{ManageOrdersUseCase, OrdersError, ValidationError};
pub use domain::orders::{ItemsPatch, NewOrder, Order, OrderStore, StoreError};
pub use domain::shared::OrderId;
pub use error::{ApiError, ErrorCode};
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::persistence::{InMemoryOrderStore, SqliteOrderStore};
