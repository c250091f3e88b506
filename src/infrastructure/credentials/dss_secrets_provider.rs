use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

use crate::domain::{Credential, CredentialProvider, CredentialType, DomainError, WANDB_SECRET_KEY};
use crate::infrastructure::dss::DssAuthClientTrait;

/// Credential provider that reads the authenticated DSS user's secrets
#[derive(Debug)]
pub struct DssSecretsCredentialProvider<C: DssAuthClientTrait> {
    client: C,
    mappings: HashMap<CredentialType, String>,
}

impl<C: DssAuthClientTrait> DssSecretsCredentialProvider<C> {
    pub fn with_client(client: C) -> Self {
        Self {
            client,
            mappings: HashMap::new(),
        }
    }

    pub fn with_mapping(mut self, credential_type: CredentialType, secret_key: impl Into<String>) -> Self {
        self.mappings.insert(credential_type, secret_key.into());
        self
    }

    /// Map the W&B credential to the `wandbcred` user secret
    pub fn with_defaults(self) -> Self {
        self.with_mapping(CredentialType::Wandb, WANDB_SECRET_KEY)
    }
}

#[async_trait]
impl<C: DssAuthClientTrait> CredentialProvider for DssSecretsCredentialProvider<C> {
    async fn get_credential(
        &self,
        credential_type: &CredentialType,
    ) -> Result<Credential, DomainError> {
        let secret_key = self.mappings.get(credential_type).ok_or_else(|| {
            DomainError::credential(format!(
                "No DSS secret mapping configured for credential type: {}",
                credential_type
            ))
        })?;

        let auth_info = self.client.get_auth_info(true).await?;
        debug!(
            identity = auth_info.auth_identifier.as_deref().unwrap_or("unknown"),
            secrets = auth_info.secrets.len(),
            "Fetched DSS user secrets"
        );

        let api_key = auth_info.find_secret(secret_key).ok_or_else(|| {
            DomainError::not_found(format!(
                "Secret '{}' not found in Dataiku user secrets",
                secret_key
            ))
        })?;

        Ok(Credential::new(credential_type.clone(), api_key.to_string()))
    }
}
