//! Console routes.
//!
//! Every page reads and writes through the order REST API; the console keeps
//! no state of its own.

use axum::{
    Form, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};

use crate::client::{ClientError, OrdersApiClient};
use crate::view::{FormError, OrderForm, render_error, render_index};

/// Shared state for the console handlers.
#[derive(Debug, Clone)]
pub struct ConsoleState {
    /// Order API client.
    pub client: OrdersApiClient,
}

/// Failure while serving a console page.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Upstream API call failed.
    #[error(transparent)]
    Upstream(#[from] ClientError),
    /// Submitted form could not be converted.
    #[error(transparent)]
    Form(#[from] FormError),
}

impl ConsoleError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(ClientError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Upstream(ClientError::Rejected(_)) | Self::Form(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ConsoleError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Console request failed");
        } else {
            tracing::debug!(error = %self, "Console request rejected");
        }

        let title = status.canonical_reason().unwrap_or("Error");
        (status, Html(render_error(title, &self.to_string()))).into_response()
    }
}

/// Create the console router.
pub fn create_router(state: ConsoleState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/insertOrders", get(insert_orders_get).post(insert_orders))
        .route("/deleteOrders/{id}", get(delete_order))
        .route("/editOrders/{id}", get(edit_order))
        .with_state(state)
}

/// List orders with an empty entry form.
async fn index(State(state): State<ConsoleState>) -> Result<Html<String>, ConsoleError> {
    let orders = state.client.list_orders().await?;
    Ok(Html(render_index(&orders, &OrderForm::default())))
}

/// Submit the entry form.
async fn insert_orders(
    State(state): State<ConsoleState>,
    Form(form): Form<OrderForm>,
) -> Result<Redirect, ConsoleError> {
    let order = form.to_new_order()?;
    let location = state.client.create_order(&order).await?;
    tracing::info!(location = %location, "Order submitted from console");
    Ok(Redirect::to("/"))
}

async fn insert_orders_get() -> Redirect {
    Redirect::to("/")
}

/// Delete an order, then return to the list.
async fn delete_order(
    State(state): State<ConsoleState>,
    Path(id): Path<i64>,
) -> Result<Redirect, ConsoleError> {
    state.client.delete_order(id).await?;
    tracing::info!(order_id = id, "Order deleted from console");
    Ok(Redirect::to("/"))
}

/// Edit an order.
///
/// The order is removed upstream and its values are put back into the entry
/// form; saving the form inserts it again under a new id.
async fn edit_order(
    State(state): State<ConsoleState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, ConsoleError> {
    let order = state.client.get_order(id).await?;
    state.client.delete_order(id).await?;
    tracing::info!(order_id = id, "Order opened for editing");

    let orders = state.client.list_orders().await?;
    Ok(Html(render_index(&orders, &OrderForm::from_order(&order))))
}
