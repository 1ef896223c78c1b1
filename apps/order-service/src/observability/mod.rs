//! Observability module for metrics, tracing, and logging.
//!
//! This module provides instrumentation for the order service,
//! including Prometheus metrics export and distributed tracing.

mod metrics;
mod tracing;

pub use self::metrics::{
    MetricsConfig, MetricsError, init_metrics, record_store_operation,
    record_validation_rejection,
};
pub use self::tracing::{TelemetryGuard, init_telemetry};
