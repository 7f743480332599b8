//! Init-db command - creates the tables and exits

use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::storage::{connect, ensure_schema, PostgresConfig};

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_logging(&config.logging);

    if config.database.url.is_empty() {
        anyhow::bail!("database.url (or DATABASE_URL) must be set to initialize the database");
    }

    let pool = connect(&PostgresConfig::from(&config.database)).await?;
    ensure_schema(&pool).await?;
    pool.close().await;

    info!("Database initialized");
    Ok(())
}
