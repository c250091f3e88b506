use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, info};

use super::queries::{COLLECTION_ARTIFACTS_QUERY, REGISTRY_COLLECTIONS_QUERY, VIEWER_QUERY};
use super::types::{
    ArtifactsData, CollectionsData, Connection, GraphQlResponse, Organization, ViewerData,
};
use crate::config::WandbConfig;
use crate::domain::{
    Credential, DomainError, ModelRegistryConnector, ModelRegistryProvider, RegistryArtifact,
    RegistryCollection,
};

const PROVIDER: &str = "wandb";
const PAGE_SIZE: i64 = 100;
const REGISTRY_PROJECT_PREFIX: &str = "wandb-registry-";

fn wandb_error(message: impl Into<String>) -> DomainError {
    DomainError::provider(PROVIDER, message)
}

/// Pick the organization whose registries are listed
pub fn resolve_organization(
    configured: Option<&str>,
    organizations: &[Organization],
) -> Result<String, DomainError> {
    if let Some(name) = configured {
        return Ok(name.to_string());
    }

    match organizations {
        [only] => Ok(only.name.clone()),
        [] => Err(wandb_error(
            "Authenticated user belongs to no organization; registries are unavailable",
        )),
        many => {
            let names: Vec<&str> = many.iter().map(|o| o.name.as_str()).collect();
            Err(wandb_error(format!(
                "Authenticated user belongs to multiple organizations ({}); set SYNC__WANDB__ORGANIZATION",
                names.join(", ")
            )))
        }
    }
}

/// Authenticated W&B GraphQL client scoped to one organization
#[derive(Clone)]
pub struct HttpWandbClient {
    graphql_url: String,
    api_key: String,
    organization: String,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for HttpWandbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpWandbClient")
            .field("graphql_url", &self.graphql_url)
            .field("organization", &self.organization)
            .finish_non_exhaustive()
    }
}

impl HttpWandbClient {
    /// Authenticate with the API key and resolve the organization to inspect
    pub async fn login(config: &WandbConfig, credential: &Credential) -> Result<Self, DomainError> {
        let mut client = Self {
            graphql_url: format!("{}/graphql", config.base_url.trim_end_matches('/')),
            api_key: credential.api_key().to_string(),
            organization: String::new(),
            http_client: reqwest::Client::new(),
        };

        let data: ViewerData = client.query(VIEWER_QUERY, json!({})).await?;
        let viewer = data
            .viewer
            .ok_or_else(|| wandb_error("API key was not accepted (no viewer returned)"))?;

        client.organization =
            resolve_organization(config.organization.as_deref(), &viewer.organizations)?;

        info!(
            user = viewer.username.as_deref().unwrap_or("unknown"),
            organization = %client.organization,
            "Authenticated with Weights & Biases"
        );

        Ok(client)
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    async fn query<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T, DomainError> {
        let response = self
            .http_client
            .post(&self.graphql_url)
            .basic_auth("api", Some(&self.api_key))
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(|e| wandb_error(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(wandb_error("API key was not accepted (HTTP 401)"));
        }
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(wandb_error(format!("HTTP {}: {}", status, error_body)));
        }

        let body: GraphQlResponse<T> = response
            .json()
            .await
            .map_err(|e| wandb_error(format!("Failed to parse response: {}", e)))?;

        if !body.errors.is_empty() {
            let messages: Vec<&str> = body.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(wandb_error(format!("GraphQL error: {}", messages.join("; "))));
        }

        body.data
            .ok_or_else(|| wandb_error("GraphQL response carried no data"))
    }

    /// Follow `pageInfo` cursors until the connection is exhausted
    async fn paginate<T, N, F>(
        &self,
        query: &str,
        variables: Value,
        mut extract: F,
    ) -> Result<Vec<N>, DomainError>
    where
        T: DeserializeOwned,
        F: FnMut(T) -> Result<Connection<N>, DomainError>,
    {
        let mut nodes = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut page_variables = variables.clone();
            page_variables["cursor"] = json!(cursor);
            page_variables["perPage"] = json!(PAGE_SIZE);

            let connection = extract(self.query(query, page_variables).await?)?;
            nodes.extend(connection.edges.into_iter().map(|edge| edge.node));

            // A cursor that does not advance would repeat the same page forever
            match connection.page_info {
                page if page.has_next_page
                    && page.end_cursor.is_some()
                    && page.end_cursor != cursor =>
                {
                    cursor = page.end_cursor;
                }
                _ => break,
            }
        }

        Ok(nodes)
    }
}

#[async_trait]
impl ModelRegistryProvider for HttpWandbClient {
    async fn list_collections(&self) -> Result<Vec<RegistryCollection>, DomainError> {
        let project_filters =
            json!({ "name": { "$regex": format!("^{}", REGISTRY_PROJECT_PREFIX) } }).to_string();
        let variables = json!({
            "organization": self.organization,
            "projectFilters": project_filters,
        });

        let organization = self.organization.clone();
        let mut entity_name = String::new();
        let nodes = self
            .paginate(REGISTRY_COLLECTIONS_QUERY, variables, |data: CollectionsData| {
                let org_entity = data
                    .organization
                    .and_then(|o| o.org_entity)
                    .ok_or_else(|| {
                        wandb_error(format!("Organization '{}' not found", organization))
                    })?;
                entity_name = org_entity.name;
                Ok(org_entity.artifact_collections)
            })
            .await?;

        let collections: Vec<RegistryCollection> = nodes
            .into_iter()
            .map(|node| RegistryCollection::new(entity_name.clone(), node.project.name, node.name))
            .collect();

        debug!(count = collections.len(), "Listed registry collections");
        Ok(collections)
    }

    async fn list_artifacts(
        &self,
        collection: &RegistryCollection,
    ) -> Result<Vec<RegistryArtifact>, DomainError> {
        let variables = json!({
            "entity": collection.entity,
            "project": collection.registry,
            "collection": collection.name,
        });

        let nodes = self
            .paginate(COLLECTION_ARTIFACTS_QUERY, variables, |data: ArtifactsData| {
                data.project
                    .and_then(|p| p.artifact_collection)
                    .map(|c| c.artifact_memberships)
                    .ok_or_else(|| {
                        wandb_error(format!(
                            "Collection '{}/{}/{}' not found",
                            collection.entity, collection.registry, collection.name
                        ))
                    })
            })
            .await?;

        let artifacts = nodes
            .into_iter()
            .map(|membership| {
                let artifact = membership.artifact;
                let source_version = artifact.version_index.unwrap_or_default();
                let linked_version = membership.version_index.unwrap_or(source_version);

                RegistryArtifact {
                    artifact_type: artifact.artifact_type.map(|t| t.name),
                    source_name: format!(
                        "{}:v{}",
                        artifact.artifact_sequence.name, source_version
                    ),
                    qualified_name: format!(
                        "{}/{}/{}:v{}",
                        collection.entity, collection.registry, collection.name, linked_version
                    ),
                }
            })
            .collect();

        Ok(artifacts)
    }
}

/// Opens W&B sessions for the registry sync check
#[derive(Debug, Clone)]
pub struct WandbConnector {
    config: WandbConfig,
}

impl WandbConnector {
    pub fn new(config: WandbConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ModelRegistryConnector for WandbConnector {
    async fn connect(
        &self,
        credential: &Credential,
    ) -> Result<Box<dyn ModelRegistryProvider>, DomainError> {
        let client = HttpWandbClient::login(&self.config, credential).await?;
        Ok(Box::new(client))
    }
}
