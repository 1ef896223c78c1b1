//! Order Service Binary
//!
//! Serves the order REST API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin order-service
//! ```
//!
//! # Environment Variables
//!
//! - `ORDER_SERVICE_CONFIG`: Path to the YAML config (default: config.yaml)
//! - `RUST_LOG`: Overrides the configured log level

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use order_service::config::{
    CONFIG_PATH_ENV, Config, DEFAULT_CONFIG_PATH, PersistenceBackend, load_config,
};
use order_service::observability::{MetricsConfig, init_metrics, init_telemetry};
use order_service::{AppState, InMemoryOrderStore, OrderStore, SqliteOrderStore, create_router};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config = read_config()?;
    let _telemetry = init_telemetry(&config.observability.logging, &config.observability.tracing);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = ?config.persistence.backend,
        http_port = config.server.http_port,
        "Starting order service"
    );

    start_metrics(&config);

    match config.persistence.backend {
        PersistenceBackend::Sqlite => {
            prepare_database_dir(&config.persistence.database_url)?;
            let store = SqliteOrderStore::with_max_connections(
                &config.persistence.database_url,
                config.persistence.max_connections,
            )
            .await
            .context("failed to open order database")?;
            store
                .ensure_schema()
                .await
                .context("failed to create orders table")?;
            serve(Arc::new(store), &config).await?;
        }
        PersistenceBackend::Memory => {
            tracing::warn!("Using in-memory order store; orders are lost on restart");
            serve(Arc::new(InMemoryOrderStore::new()), &config).await?;
        }
    }

    tracing::info!("Order service stopped");
    Ok(())
}

/// Load .env file if present.
fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Read the config file named by `ORDER_SERVICE_CONFIG`, falling back to
/// built-in defaults when no file is configured and `config.yaml` is absent.
fn read_config() -> anyhow::Result<Config> {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => load_config(Some(&path)).with_context(|| format!("loading {path}")),
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_config(None).context("loading config.yaml")
        }
        Err(_) => Ok(Config::default()),
    }
}

/// Start the Prometheus exporter when enabled.
fn start_metrics(config: &Config) {
    let settings = &config.observability.metrics;
    if !settings.enabled {
        return;
    }

    // Validated by load_config.
    let Ok(addr) = settings.listen_addr.parse::<SocketAddr>() else {
        tracing::warn!(addr = %settings.listen_addr, "Invalid metrics address, metrics disabled");
        return;
    };

    if let Err(e) = init_metrics(&MetricsConfig::with_addr(addr)) {
        tracing::warn!(error = %e, "Failed to start metrics exporter, continuing without it");
    }
}

/// Create the directory holding a file-backed SQLite database.
fn prepare_database_dir(database_url: &str) -> anyhow::Result<()> {
    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path = path.split('?').next().unwrap_or_default();

    if path.is_empty() || path.starts_with(":memory:") {
        return Ok(());
    }

    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating database directory {}", parent.display()))?;
    }

    Ok(())
}

/// Serve the REST API until a shutdown signal arrives.
async fn serve<S>(store: Arc<S>, config: &Config) -> anyhow::Result<()>
where
    S: OrderStore + 'static,
{
    let state = AppState::new(
        store,
        env!("CARGO_PKG_VERSION"),
        config.server.public_base_url.clone(),
    );
    let app = create_router(state);

    let http_addr = config.server.listen_addr();
    let listener = TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("binding {http_addr}"))?;

    tracing::info!(%http_addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET    /health");
    tracing::info!("  GET    /orders");
    tracing::info!("  POST   /orders");
    tracing::info!("  GET    /orders/{{id}}");
    tracing::info!("  PUT    /orders/{{id}}");
    tracing::info!("  DELETE /orders/{{id}}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    Ok(())
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed; the process could not
/// otherwise respond to termination signals.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }

    tracing::info!("Graceful shutdown started, draining in-flight requests");
}
