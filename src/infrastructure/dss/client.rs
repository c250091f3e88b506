use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{
    saved_model::active_version, AuthInfo, DomainError, SavedModel, SavedModelProvider,
    SavedModelVersion,
};

const PROVIDER: &str = "dss";

/// DSS public API client configuration
#[derive(Clone)]
pub struct DssClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub verify_tls: bool,
}

impl DssClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            verify_tls: false,
        }
    }

    pub fn with_verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }
}

impl std::fmt::Debug for DssClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DssClientConfig")
            .field("base_url", &self.base_url)
            .field("verify_tls", &self.verify_tls)
            .finish_non_exhaustive()
    }
}

/// Trait for DSS authentication endpoint operations (for mocking)
#[async_trait]
pub trait DssAuthClientTrait: Send + Sync + std::fmt::Debug {
    async fn get_auth_info(&self, with_secrets: bool) -> Result<AuthInfo, DomainError>;
}

/// HTTP client for the DSS public API
#[derive(Debug, Clone)]
pub struct HttpDssClient {
    config: DssClientConfig,
    http_client: reqwest::Client,
}

impl HttpDssClient {
    pub fn new(config: DssClientConfig) -> Result<Self, DomainError> {
        let http_client = reqwest::Client::builder()
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()
            .map_err(|e| {
                DomainError::provider(PROVIDER, format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Build `<base_url>/public/api/<segments..>`, percent-encoding each segment
    fn url(&self, segments: &[&str]) -> Result<reqwest::Url, DomainError> {
        let invalid = || {
            DomainError::provider(
                PROVIDER,
                format!("Invalid instance URL: {}", self.config.base_url),
            )
        };

        let mut url = reqwest::Url::parse(&self.config.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(["public", "api"])
            .extend(segments);

        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T, DomainError> {
        let url = self.url(segments)?;
        debug!(url = %url, "DSS request");

        let response = self
            .http_client
            .get(url)
            .query(query)
            .basic_auth(&self.config.api_key, Some(""))
            .send()
            .await
            .map_err(|e| DomainError::provider(PROVIDER, format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::provider(
                PROVIDER,
                format!("HTTP {}: {}", status, error_body),
            ));
        }

        response.json().await.map_err(|e| {
            DomainError::provider(PROVIDER, format!("Failed to parse response: {}", e))
        })
    }

    /// List every version of a saved model
    pub async fn list_versions(
        &self,
        project_key: &str,
        saved_model_id: &str,
    ) -> Result<Vec<SavedModelVersion>, DomainError> {
        self.get_json(
            &["projects", project_key, "savedmodels", saved_model_id, "versions"],
            &[],
        )
        .await
    }
}

#[async_trait]
impl DssAuthClientTrait for HttpDssClient {
    async fn get_auth_info(&self, with_secrets: bool) -> Result<AuthInfo, DomainError> {
        let with_secrets = if with_secrets { "true" } else { "false" };
        self.get_json(&["auth", "info"], &[("withSecrets", with_secrets)])
            .await
    }
}

#[async_trait]
impl SavedModelProvider for HttpDssClient {
    async fn list_saved_models(&self, project_key: &str) -> Result<Vec<SavedModel>, DomainError> {
        // The trailing empty segment keeps the slash the listing endpoint expects
        self.get_json(&["projects", project_key, "savedmodels", ""], &[])
            .await
    }

    async fn get_active_version(
        &self,
        project_key: &str,
        saved_model_id: &str,
    ) -> Result<Option<SavedModelVersion>, DomainError> {
        let versions = self.list_versions(project_key, saved_model_id).await?;
        Ok(active_version(versions))
    }
}
