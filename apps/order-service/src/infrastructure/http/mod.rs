//! HTTP/REST API adapter.
//!
//! Inbound adapter implementing REST endpoints that delegate to the order use case.

mod controller;
mod request;
mod response;
mod wire_time;

pub use controller::{AppState, create_router};
pub use request::*;
pub use response::*;
