//! PostgreSQL connection pooling

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::domain::DomainError;

/// PostgreSQL pool configuration
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Idle timeout in seconds
    pub idle_timeout_secs: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self::from(&DatabaseConfig::default())
    }
}

impl From<&DatabaseConfig> for PostgresConfig {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            url: config.url.clone(),
            max_connections: config.max_connections,
            min_connections: config.min_connections,
            connect_timeout_secs: config.connect_timeout_secs,
            idle_timeout_secs: config.idle_timeout_secs,
        }
    }
}

/// Open a connection pool
pub async fn connect(config: &PostgresConfig) -> Result<PgPool, DomainError> {
    info!(
        max_connections = config.max_connections,
        "Connecting to PostgreSQL..."
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))?;

    info!("PostgreSQL connection established");
    Ok(pool)
}
