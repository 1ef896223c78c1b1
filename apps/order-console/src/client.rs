//! HTTP client for the order REST API.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// An order as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOrder {
    /// Store-assigned id.
    pub order_id: i64,
    /// Item description.
    #[serde(default)]
    pub items: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub order_date: Option<String>,
    /// `HH:MM:SS`.
    #[serde(default)]
    pub order_time: Option<String>,
    /// Quantity.
    #[serde(default)]
    pub quantity: Option<i32>,
    /// Availability flag.
    #[serde(default)]
    pub on_hand: Option<bool>,
}

/// Body sent to `POST /orders`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApiOrder {
    /// Item description.
    pub items: Option<String>,
    /// `YYYY-MM-DD`.
    pub order_date: Option<String>,
    /// `HH:MM` or `HH:MM:SS`.
    pub order_time: Option<String>,
    /// Quantity.
    pub quantity: Option<i32>,
    /// Availability flag.
    pub on_hand: Option<bool>,
}

/// Error body returned by the API.
#[derive(Debug, Clone, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Errors talking to the order API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The API could not be reached or the connection failed.
    #[error("order API unreachable: {0}")]
    Network(String),

    /// The API reported no such order.
    #[error("order {order_id} not found")]
    NotFound {
        /// Requested id.
        order_id: i64,
    },

    /// The API rejected the request as invalid.
    #[error("order rejected: {0}")]
    Rejected(String),

    /// Any other non-success status.
    #[error("order API returned {status}: {message}")]
    Status {
        /// HTTP status.
        status: u16,
        /// Error message from the body, or the raw body.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("invalid response from order API: {0}")]
    Decode(String),
}

/// Client for the order REST API.
#[derive(Debug, Clone)]
pub struct OrdersApiClient {
    client: Client,
    base_url: String,
}

impl OrdersApiClient {
    /// Create a client for the API at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /orders`.
    pub async fn list_orders(&self) -> Result<Vec<ApiOrder>, ClientError> {
        let response = self
            .client
            .get(format!("{}/orders", self.base_url))
            .send()
            .await
            .map_err(network_error)?;

        let response = check_status(response, None).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// `GET /orders/{id}`.
    pub async fn get_order(&self, order_id: i64) -> Result<ApiOrder, ClientError> {
        let response = self
            .client
            .get(self.order_url(order_id))
            .send()
            .await
            .map_err(network_error)?;

        let response = check_status(response, Some(order_id)).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// `POST /orders`; returns the location of the new order.
    pub async fn create_order(&self, order: &NewApiOrder) -> Result<String, ClientError> {
        let response = self
            .client
            .post(format!("{}/orders", self.base_url))
            .json(order)
            .send()
            .await
            .map_err(network_error)?;

        let response = check_status(response, None).await?;
        response
            .text()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// `DELETE /orders/{id}`.
    pub async fn delete_order(&self, order_id: i64) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.order_url(order_id))
            .send()
            .await
            .map_err(network_error)?;

        check_status(response, Some(order_id)).await?;
        Ok(())
    }

    fn order_url(&self, order_id: i64) -> String {
        format!("{}/orders/{order_id}", self.base_url)
    }
}

#[allow(clippy::needless_pass_by_value)]
fn network_error(err: reqwest::Error) -> ClientError {
    ClientError::Network(err.to_string())
}

async fn check_status(
    response: reqwest::Response,
    order_id: Option<i64>,
) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body).map_or(body, |e| e.message);

    tracing::debug!(status = status.as_u16(), message = %message, "Order API error response");

    Err(match (status, order_id) {
        (StatusCode::NOT_FOUND, Some(order_id)) => ClientError::NotFound { order_id },
        (StatusCode::BAD_REQUEST, _) => ClientError::Rejected(message),
        _ => ClientError::Status {
            status: status.as_u16(),
            message,
        },
    })
}
