//! QAT API
//!
//! Upload text documents, ask questions about them and get an extractive
//! answer with summary bullet points, then check a learner's understanding
//! with a generated test question scored by embedding similarity.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::inference::InferenceFactory;
use infrastructure::services::StudyService;
use infrastructure::storage::{PostgresConfig, StorageFactory};
use tracing::info;

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let repositories = StorageFactory::create(
        config.storage.backend,
        &PostgresConfig::from(&config.database),
    )
    .await?;
    info!(backend = ?config.storage.backend, "Storage initialized");

    let inference = InferenceFactory::create(&config.inference)?;

    let study_service = StudyService::new(repositories, inference)
        .with_understanding_threshold(config.inference.understanding_threshold);

    Ok(AppState::new(Arc::new(study_service)))
}
