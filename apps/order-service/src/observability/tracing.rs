//! Logging and OpenTelemetry tracing setup.
//!
//! Console output is always installed; OTLP export is added when an
//! endpoint is configured.
//!
//! # Environment
//!
//! - `RUST_LOG`: overrides the configured log level when set.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::config::{LogFormat, LoggingConfig, TracingConfig};

/// Guard that shuts down the tracer provider on drop.
#[derive(Debug)]
pub struct TelemetryGuard {
    provider: Option<SdkTracerProvider>,
}

impl TelemetryGuard {
    /// Whether spans are being exported over OTLP.
    #[must_use]
    pub const fn is_exporting(&self) -> bool {
        self.provider.is_some()
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take()
            && let Err(e) = provider.shutdown()
        {
            eprintln!("Error shutting down tracer provider: {e:?}");
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Returns a guard that flushes and shuts down the OTLP exporter when dropped.
/// Falls back to console-only logging when the exporter cannot be built.
#[must_use]
pub fn init_telemetry(logging: &LoggingConfig, tracing_config: &TracingConfig) -> TelemetryGuard {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let fmt_layer = match logging.format {
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().pretty().boxed(),
        LogFormat::Compact => tracing_subscriber::fmt::layer().compact().boxed(),
    };

    let provider = tracing_config
        .otlp_endpoint
        .as_deref()
        .and_then(|endpoint| match build_provider(endpoint) {
            Ok(provider) => Some(provider),
            Err(e) => {
                eprintln!("Failed to create OTLP exporter: {e}, falling back to console logging");
                None
            }
        });

    let otel_layer = provider.as_ref().map(|p| {
        tracing_opentelemetry::layer().with_tracer(p.tracer(tracing_config.service_name.clone()))
    });

    if let Err(e) = Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()
    {
        eprintln!("Tracing subscriber already installed: {e}");
    }

    if let Some(endpoint) = tracing_config.otlp_endpoint.as_deref()
        && provider.is_some()
    {
        tracing::info!(
            service_name = %tracing_config.service_name,
            endpoint = %endpoint,
            "OpenTelemetry initialized"
        );
    }

    TelemetryGuard { provider }
}

fn build_provider(endpoint: &str) -> Result<SdkTracerProvider, opentelemetry_otlp::ExporterBuildError> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    Ok(SdkTracerProvider::builder()
        .with_simple_exporter(exporter)
        .build())
}
