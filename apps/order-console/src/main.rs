//! Order Console Binary
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin order-console
//! ```
//!
//! # Environment Variables
//!
//! - `ORDERS_API_URL`: Order REST API base URL (default: <http://localhost:8080>)
//! - `CONSOLE_PORT`: Listen port (default: 8081)
//! - `CONSOLE_BIND_ADDRESS`: Bind address (default: 0.0.0.0)
//! - `CONSOLE_API_TIMEOUT_SECS`: Upstream request timeout (default: 10)
//! - `RUST_LOG`: Log level (default: info)

use anyhow::Context;
use order_console::{ConsoleSettings, ConsoleState, OrdersApiClient, create_router};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let settings = ConsoleSettings::from_env()?;
    tracing::info!(
        api = %settings.api_base_url,
        port = settings.port,
        "Starting order console"
    );

    let client = OrdersApiClient::new(settings.api_base_url.clone(), settings.request_timeout)?;
    let app = create_router(ConsoleState { client });

    let addr = settings.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!(%addr, "Console listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("console server error")?;

    tracing::info!("Order console stopped");
    Ok(())
}

/// Initialize the tracing subscriber with environment filter.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("order_console=info,info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
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
        () = ctrl_c => tracing::info!("Received Ctrl+C, initiating shutdown"),
        () = terminate => tracing::info!("Received SIGTERM, initiating shutdown"),
    }
}
