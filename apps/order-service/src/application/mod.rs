//! Application layer: request validation and the order use case.

pub mod use_cases;
pub mod validation;

pub use use_cases::{ManageOrdersUseCase, OrdersError};
pub use validation::{MAX_ITEMS_LEN, ValidationError, validate_items_patch, validate_new_order};
