//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, DatabaseConfig, EmbeddingConfig, EmbeddingProviderType, InferenceConfig,
    LogFormat, LoggingConfig, MetricsConfig, ModelEndpointConfig, ServerConfig, StorageConfig,
    SummarizationConfig,
};
