//! In-memory order store for testing and local development.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::orders::{ItemsPatch, NewOrder, Order, OrderStore, StoreError};
use crate::domain::shared::OrderId;

/// In-memory implementation of `OrderStore`.
///
/// Mirrors the SQLite adapter: ids start at 1, increase monotonically and
/// are never reused, even after a delete.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    orders: HashMap<OrderId, Order>,
    last_id: i64,
}

impl InMemoryOrderStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of orders in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().orders.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.read().orders.is_empty()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn list_all(&self) -> Result<Vec<Order>, StoreError> {
        let state = self.state.read();
        let mut orders: Vec<Order> = state.orders.values().cloned().collect();
        orders.sort_by(Order::listing_cmp);
        Ok(orders)
    }

    async fn create(&self, order: &NewOrder) -> Result<Order, StoreError> {
        let mut state = self.state.write();
        state.last_id += 1;
        let created = order.clone().into_order(OrderId::new(state.last_id));
        state.orders.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: OrderId) -> Result<Order, StoreError> {
        self.state
            .read()
            .orders
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn update(&self, id: OrderId, patch: &ItemsPatch) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let order = state
            .orders
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found(id))?;
        order.items = Some(patch.items.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: OrderId) -> Result<(), StoreError> {
        self.state
            .write()
            .orders
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dated(items: &str, y: i32, m: u32, d: u32) -> NewOrder {
        NewOrder {
            order_date: NaiveDate::from_ymd_opt(y, m, d),
            ..NewOrder::with_items(items)
        }
    }

    #[tokio::test]
    async fn create_and_get_by_id() {
        let store = InMemoryOrderStore::new();
        let created = store.create(&NewOrder::with_items("Widget")).await.unwrap();

        assert_eq!(created.id, OrderId::new(1));
        assert_eq!(store.get_by_id(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn get_by_id_not_found() {
        let store = InMemoryOrderStore::new();
        let err = store.get_by_id(OrderId::new(1)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn list_all_sorted_by_date() {
        let store = InMemoryOrderStore::new();
        store.create(&dated("b", 2023, 1, 1)).await.unwrap();
        store.create(&dated("a", 2022, 12, 31)).await.unwrap();
        store.create(&NewOrder::with_items("undated")).await.unwrap();

        let items: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|o| o.items)
            .collect();

        assert_eq!(items, vec!["undated", "a", "b"]);
    }

    #[tokio::test]
    async fn update_items_only() {
        let store = InMemoryOrderStore::new();
        let created = store.create(&dated("Widget", 2023, 1, 1)).await.unwrap();

        store
            .update(created.id, &ItemsPatch::new("Gadget"))
            .await
            .unwrap();

        let found = store.get_by_id(created.id).await.unwrap();
        assert_eq!(found.items.as_deref(), Some("Gadget"));
        assert_eq!(found.order_date, created.order_date);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let store = InMemoryOrderStore::new();
        let err = store
            .update(OrderId::new(4), &ItemsPatch::new("x"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_then_create_does_not_reuse_id() {
        let store = InMemoryOrderStore::new();
        let first = store.create(&NewOrder::default()).await.unwrap();
        store.delete_by_id(first.id).await.unwrap();

        let second = store.create(&NewOrder::default()).await.unwrap();

        assert_eq!(second.id, OrderId::new(2));
        assert!(store.delete_by_id(first.id).await.unwrap_err().is_not_found());
    }

    #[test]
    fn len_and_is_empty() {
        let store = InMemoryOrderStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
