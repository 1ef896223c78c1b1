//! Order store errors.

use thiserror::Error;

use crate::domain::shared::OrderId;

/// Errors surfaced by an [`OrderStore`](super::OrderStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No row matched the requested id.
    #[error("Order not found: {order_id}")]
    NotFound {
        /// Requested order id.
        order_id: OrderId,
    },

    /// Backend failure (connectivity, query, row mapping).
    #[error("Storage failure: {0}")]
    Storage(String),
}

impl StoreError {
    /// Build a `NotFound` error for the given id.
    #[must_use]
    pub const fn not_found(order_id: OrderId) -> Self {
        Self::NotFound { order_id }
    }

    /// Whether this is the `NotFound` condition.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
