//! Shared Domain Types
//!
//! Value objects shared across the domain.

pub mod identifiers;

pub use identifiers::OrderId;
