//! Domain Layer
//!
//! The innermost layer containing the order model with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Entities**: The persisted `Order` record and its creation/patch inputs
//! - **Value Objects**: Strongly-typed identifiers
//! - **Store Traits**: Persistence abstractions (implemented in adapters)
//!
//! # Bounded Contexts
//!
//! - [`orders`]: Order records, the store contract and its error taxonomy

pub mod orders;
pub mod shared;
