use serde::Deserialize;

use crate::domain::inference::{SummarizationParams, DEFAULT_UNDERSTANDING_THRESHOLD};
use crate::infrastructure::storage::StorageType;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub database: DatabaseConfig,
    pub inference: InferenceConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageType,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

/// Where the three pretrained models are served
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    pub timeout_secs: u64,
    pub understanding_threshold: f32,
    pub question_answering: ModelEndpointConfig,
    pub summarization: SummarizationConfig,
    pub embedding: EmbeddingConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ModelEndpointConfig {
    pub url: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SummarizationConfig {
    pub url: String,
    pub api_key: Option<String>,
    #[serde(flatten)]
    pub params: SummarizationParams,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProviderType {
    #[default]
    HuggingFace,
    OpenAi,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub provider: EmbeddingProviderType,
    /// Feature-extraction URL, or the API base URL for `openai`
    pub url: String,
    pub api_key: Option<String>,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://postgres@localhost/qat".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 60,
            understanding_threshold: DEFAULT_UNDERSTANDING_THRESHOLD,
            question_answering: ModelEndpointConfig {
                url: "http://localhost:8001/predictions/bert-base-uncased".to_string(),
                api_key: None,
            },
            summarization: SummarizationConfig::default(),
            embedding: EmbeddingConfig::default(),
        }
    }
}

impl Default for SummarizationConfig {
    fn default() -> Self {
        Self {
            url: "https://api-inference.huggingface.co/models/t5-small".to_string(),
            api_key: None,
            params: SummarizationParams::default(),
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: EmbeddingProviderType::default(),
            url: "https://api-inference.huggingface.co/models/sentence-transformers/all-MiniLM-L6-v2"
                .to_string(),
            api_key: None,
            model: "all-MiniLM-L6-v2".to_string(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: "/metrics".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("QAT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: Self = config.try_deserialize()?;

        if let Ok(url) = std::env::var("DATABASE_URL") {
            app_config.database.url = url;
        }

        Ok(app_config)
    }
}
