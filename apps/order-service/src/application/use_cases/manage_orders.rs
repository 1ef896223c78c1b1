//! Manage Orders Use Case
//!
//! Validates requests, delegates to the [`OrderStore`] and records a metric
//! sample for every store call.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;

use crate::application::validation::{ValidationError, validate_items_patch, validate_new_order};
use crate::domain::orders::{NewOrder, Order, OrderStore, StoreError};
use crate::domain::shared::OrderId;
use crate::observability::{record_store_operation, record_validation_rejection};

/// Failure of an order use case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrdersError {
    /// Rejected before reaching the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Reported by the store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Use case for the order CRUD operations.
pub struct ManageOrdersUseCase<S>
where
    S: OrderStore,
{
    store: Arc<S>,
}

impl<S> ManageOrdersUseCase<S>
where
    S: OrderStore,
{
    /// Create a new `ManageOrdersUseCase`.
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Every order, ascending by date with undated orders first.
    ///
    /// # Errors
    ///
    /// Returns `OrdersError::Store` when the store fails.
    pub async fn list(&self) -> Result<Vec<Order>, OrdersError> {
        let orders = timed("list_all", self.store.list_all()).await?;
        tracing::debug!(count = orders.len(), "Listed orders");
        Ok(orders)
    }

    /// Validate and persist a new order.
    ///
    /// # Errors
    ///
    /// Returns `OrdersError::Validation` for bad input, `OrdersError::Store`
    /// when the insert fails.
    pub async fn create(&self, order: NewOrder) -> Result<Order, OrdersError> {
        if let Err(e) = validate_new_order(&order) {
            record_validation_rejection("create", e.field());
            tracing::debug!(field = e.field(), error = %e, "Rejected order create");
            return Err(e.into());
        }

        let created = timed("create", self.store.create(&order)).await?;
        tracing::info!(order_id = %created.id, "Order created");
        Ok(created)
    }

    /// Fetch one order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` (wrapped) when no order has this id.
    pub async fn get(&self, id: OrderId) -> Result<Order, OrdersError> {
        Ok(timed("get_by_id", self.store.get_by_id(id)).await?)
    }

    /// Replace the `items` of an existing order.
    ///
    /// # Errors
    ///
    /// Returns `OrdersError::Validation` when `items` is missing or invalid,
    /// `StoreError::NotFound` (wrapped) when no order has this id.
    pub async fn update(&self, id: OrderId, items: Option<String>) -> Result<(), OrdersError> {
        let patch = match validate_items_patch(items) {
            Ok(patch) => patch,
            Err(e) => {
                record_validation_rejection("update", e.field());
                tracing::debug!(order_id = %id, field = e.field(), error = %e, "Rejected order update");
                return Err(e.into());
            }
        };

        timed("update", self.store.update(id, &patch)).await?;
        tracing::info!(order_id = %id, "Order updated");
        Ok(())
    }

    /// Remove an order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` (wrapped) when no order has this id.
    pub async fn delete(&self, id: OrderId) -> Result<(), OrdersError> {
        timed("delete_by_id", self.store.delete_by_id(id)).await?;
        tracing::info!(order_id = %id, "Order deleted");
        Ok(())
    }
}

impl<S> Clone for ManageOrdersUseCase<S>
where
    S: OrderStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

async fn timed<T, F>(operation: &'static str, call: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    let start = Instant::now();
    let result = call.await;
    let latency = start.elapsed().as_secs_f64();

    let outcome = match &result {
        Ok(_) => "ok",
        Err(StoreError::NotFound { order_id }) => {
            tracing::debug!(operation, order_id = %order_id, "Order not found");
            "not_found"
        }
        Err(StoreError::Storage(e)) => {
            tracing::error!(operation, error = %e, "Order store failure");
            "storage_failure"
        }
    };
    record_store_operation(operation, outcome, latency);

    result
}
