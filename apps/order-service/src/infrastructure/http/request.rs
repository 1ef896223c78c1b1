//! HTTP request DTOs.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::orders::NewOrder;

/// Body of `POST /orders`.
///
/// Every field is optional. `localD` and `localT` are accepted as older
/// spellings of `orderDate` and `orderTime`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Item description.
    #[serde(default)]
    pub items: Option<String>,
    /// Order date (`YYYY-MM-DD`).
    #[serde(default, alias = "localD")]
    pub order_date: Option<NaiveDate>,
    /// Order time (`HH:MM` or `HH:MM:SS`).
    #[serde(default, alias = "localT", with = "super::wire_time")]
    pub order_time: Option<NaiveTime>,
    /// Quantity.
    #[serde(default)]
    pub quantity: Option<i32>,
    /// Availability flag.
    #[serde(default)]
    pub on_hand: Option<bool>,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        Self {
            items: request.items,
            order_date: request.order_date,
            order_time: request.order_time,
            quantity: request.quantity,
            on_hand: request.on_hand,
        }
    }
}

/// Body of `PUT /orders/{id}`. Only `items` is applied; other fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrderRequest {
    /// Replacement item description.
    #[serde(default)]
    pub items: Option<String>,
}
