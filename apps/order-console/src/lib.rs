// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Order Console
//!
//! Server-rendered HTML pages for listing, adding, editing and deleting
//! orders. All data lives behind the order REST API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

pub mod client;
pub mod routes;
pub mod settings;
pub mod view;

pub use client::{ApiOrder, ClientError, NewApiOrder, OrdersApiClient};
pub use routes::{ConsoleError, ConsoleState, create_router};
pub use settings::{ConfigError, ConsoleSettings};
pub use view::{FormError, OrderForm};
