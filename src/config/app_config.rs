use serde::Deserialize;

use crate::domain::DEFAULT_IDENTIFIER_PREFIX;

const DEFAULT_WANDB_BASE_URL: &str = "https://api.wandb.ai";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub dss: DssConfig,
    pub wandb: WandbConfig,
    pub sync: SyncConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// DSS client settings
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DssConfig {
    /// Verify the instance's TLS certificate. Internal instances commonly run
    /// with self-signed certificates, so this is off unless enabled.
    pub verify_tls: bool,
}

/// W&B client settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WandbConfig {
    pub base_url: String,
    /// Organization whose registries are listed; resolved from the viewer when unset
    pub organization: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub identifier_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for WandbConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WANDB_BASE_URL.to_string(),
            organization: None,
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            identifier_prefix: DEFAULT_IDENTIFIER_PREFIX.to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("SYNC")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
