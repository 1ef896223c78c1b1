//! Order Entity
//!
//! The persisted order record plus the inputs used to create and patch it.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveTime};

use crate::domain::shared::OrderId;

/// Fields supplied when creating an order.
///
/// Every field is optional and persisted verbatim; the store performs no validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewOrder {
    /// Free-form description of what was ordered.
    pub items: Option<String>,
    /// Calendar date of the order (primary listing key).
    pub order_date: Option<NaiveDate>,
    /// Time of day of the order, without timezone.
    pub order_time: Option<NaiveTime>,
    /// Ordered quantity.
    pub quantity: Option<i32>,
    /// Availability flag.
    pub on_hand: Option<bool>,
}

impl NewOrder {
    /// Create an order input that only carries an item description.
    #[must_use]
    pub fn with_items(items: impl Into<String>) -> Self {
        Self {
            items: Some(items.into()),
            ..Self::default()
        }
    }

    /// Attach the store-assigned id, producing the persisted record.
    #[must_use]
    pub fn into_order(self, id: OrderId) -> Order {
        Order {
            id,
            items: self.items,
            order_date: self.order_date,
            order_time: self.order_time,
            quantity: self.quantity,
            on_hand: self.on_hand,
        }
    }
}

/// Patch applied by an update. Only `items` is mutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsPatch {
    /// Replacement item description.
    pub items: String,
}

impl ItemsPatch {
    /// Create a patch.
    #[must_use]
    pub fn new(items: impl Into<String>) -> Self {
        Self {
            items: items.into(),
        }
    }
}

/// A persisted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Store-assigned identifier.
    pub id: OrderId,
    /// Free-form description of what was ordered.
    pub items: Option<String>,
    /// Calendar date of the order.
    pub order_date: Option<NaiveDate>,
    /// Time of day of the order.
    pub order_time: Option<NaiveTime>,
    /// Ordered quantity.
    pub quantity: Option<i32>,
    /// Availability flag.
    pub on_hand: Option<bool>,
}

impl Order {
    /// The record's fields without its id.
    #[must_use]
    pub fn to_new_order(&self) -> NewOrder {
        NewOrder {
            items: self.items.clone(),
            order_date: self.order_date,
            order_time: self.order_time,
            quantity: self.quantity,
            on_hand: self.on_hand,
        }
    }

    /// Listing order: ascending by date with undated orders first, then by id.
    #[must_use]
    pub fn listing_cmp(&self, other: &Self) -> Ordering {
        // `None < Some(_)` puts undated orders first.
        self.order_date
            .cmp(&other.order_date)
            .then(self.id.cmp(&other.id))
    }
}
