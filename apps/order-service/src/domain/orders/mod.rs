//! Orders Bounded Context
//!
//! The single entity of the system and the store contract over it.
//!
//! # Key Concepts
//!
//! - **Order**: Persisted record with a store-assigned, never reused id
//! - **Listing Order**: Ascending by date, undated orders first, ties by id
//! - **Store Errors**: `NotFound` is distinct from backend failures

pub mod errors;
pub mod order;
pub mod repository;

pub use errors::StoreError;
pub use order::{ItemsPatch, NewOrder, Order};
pub use repository::OrderStore;
