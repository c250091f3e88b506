use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Type of credential (which external service it belongs to)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialType {
    /// Weights & Biases API key
    Wandb,
}

/// Credential entity holding an API key resolved from a secret store
#[derive(Clone)]
pub struct Credential {
    credential_type: CredentialType,
    api_key: String,
    fetched_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(credential_type: CredentialType, api_key: String) -> Self {
        Self {
            credential_type,
            api_key,
            fetched_at: Utc::now(),
        }
    }

    pub fn credential_type(&self) -> &CredentialType {
        &self.credential_type
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("credential_type", &self.credential_type)
            .field("api_key", &"<redacted>")
            .field("fetched_at", &self.fetched_at)
            .finish()
    }
}

impl std::fmt::Display for CredentialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialType::Wandb => write!(f, "wandb"),
        }
    }
}
