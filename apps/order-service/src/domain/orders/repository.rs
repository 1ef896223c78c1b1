//! Order Store Trait
//!
//! Defines the persistence abstraction for orders.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::errors::StoreError;
use super::order::{ItemsPatch, NewOrder, Order};
use crate::domain::shared::OrderId;

/// Store contract for order persistence.
///
/// This is a domain interface (port) implemented by infrastructure
/// adapters (SQLite, in-memory). Every operation is a single atomic
/// statement against the backing store; implementations hold no
/// request state between calls.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// List every stored order, ascending by order date (undated first, ties by id).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the query fails.
    async fn list_all(&self) -> Result<Vec<Order>, StoreError>;

    /// Insert a new order and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the insert fails.
    async fn create(&self, order: &NewOrder) -> Result<Order, StoreError>;

    /// Find an order by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no row matches.
    async fn get_by_id(&self, id: OrderId) -> Result<Order, StoreError>;

    /// Overwrite the `items` field of an order; every other field is untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no row matches.
    async fn update(&self, id: OrderId, patch: &ItemsPatch) -> Result<(), StoreError>;

    /// Delete an order by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no row matches.
    async fn delete_by_id(&self, id: OrderId) -> Result<(), StoreError>;
}
