//! Use cases.

mod manage_orders;

pub use manage_orders::{ManageOrdersUseCase, OrdersError};
