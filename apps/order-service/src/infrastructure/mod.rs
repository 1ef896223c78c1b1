//! Infrastructure adapters: HTTP driver and store implementations.

pub mod http;
pub mod persistence;
