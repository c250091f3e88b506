use thiserror::Error;

use crate::domain::DomainError;

/// Secret key under which the W&B API key is stored in DSS
pub const WANDB_SECRET_KEY: &str = "wandbcred";

/// A reported failure of the registry sync check
#[derive(Debug, Error)]
pub enum SyncFailure {
    #[error("Missing required environment variables: {0}")]
    MissingConfig(&'static str),

    #[error("Secret '{}' not found in Dataiku user secrets.", WANDB_SECRET_KEY)]
    MissingSecret,

    #[error("Weights & Biases communication error: {0}")]
    Communication(String),

    #[error("Setup or connection error: {0}")]
    Setup(String),

    #[error("Sync Validation Failed: Found models in Dataiku, but none are registered in W&B.")]
    NoPublishedModels,
}

impl SyncFailure {
    /// Classify an error raised while connecting or listing inventories
    pub fn from_setup_error(error: DomainError) -> Self {
        match error.provider_name() {
            Some("wandb") => Self::Communication(error.to_string()),
            _ => Self::Setup(error.to_string()),
        }
    }
}
