//! HTTP response DTOs.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::orders::Order;

/// An order as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    /// Store-assigned id.
    pub order_id: i64,
    /// Item description.
    pub items: Option<String>,
    /// Order date.
    pub order_date: Option<NaiveDate>,
    /// Order time, `HH:MM:SS`.
    #[serde(default, with = "super::wire_time")]
    pub order_time: Option<NaiveTime>,
    /// Quantity.
    pub quantity: Option<i32>,
    /// Availability flag.
    pub on_hand: Option<bool>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            order_id: order.id.value(),
            items: order.items,
            order_date: order.order_date,
            order_time: order.order_time,
            quantity: order.quantity,
            on_hand: order.on_hand,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}
