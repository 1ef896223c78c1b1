//! Order store configuration.

use serde::{Deserialize, Serialize};

/// Which `OrderStore` implementation backs the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistenceBackend {
    /// SQLite database via sqlx.
    #[default]
    Sqlite,
    /// Process-local map, lost on restart.
    Memory,
}

/// Persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Store backend.
    #[serde(default)]
    pub backend: PersistenceBackend,
    /// SQLite connection URL (e.g. `sqlite://./data/orders.db?mode=rwc`).
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Maximum pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            backend: PersistenceBackend::default(),
            database_url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_database_url() -> String {
    "sqlite://./data/orders.db?mode=rwc".to_string()
}

const fn default_max_connections() -> u32 {
    5
}
