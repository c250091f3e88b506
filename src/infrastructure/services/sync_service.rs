//! Registry sync service - cross-references DSS saved models with registry artifacts

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    find_matches, ArtifactSummary, Credential, CredentialProvider, CredentialType, DomainError,
    ModelCheck, ModelIdentifier, ModelRegistryConnector, ModelRegistryProvider, SavedModel,
    SavedModelProvider, SyncFailure, SyncReport, DEFAULT_IDENTIFIER_PREFIX,
};

/// Runs the sync check for one project, strictly in sequence
#[derive(Debug)]
pub struct RegistrySyncService {
    credentials: Arc<dyn CredentialProvider>,
    saved_models: Arc<dyn SavedModelProvider>,
    registry: Arc<dyn ModelRegistryConnector>,
    identifier_prefix: String,
}

impl RegistrySyncService {
    pub fn new(
        credentials: Arc<dyn CredentialProvider>,
        saved_models: Arc<dyn SavedModelProvider>,
        registry: Arc<dyn ModelRegistryConnector>,
    ) -> Self {
        Self {
            credentials,
            saved_models,
            registry,
            identifier_prefix: DEFAULT_IDENTIFIER_PREFIX.to_string(),
        }
    }

    pub fn with_identifier_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.identifier_prefix = prefix.into();
        self
    }

    /// Run the check against `project_key`.
    ///
    /// Succeeds when the project has no saved models or when at least one
    /// saved model's active version has a matching registry artifact.
    /// The registry is not contacted for a project without saved models.
    pub async fn run(&self, project_key: &str) -> Result<SyncReport, SyncFailure> {
        let credential = self.resolve_credential().await?;

        let saved_models = self
            .saved_models
            .list_saved_models(project_key)
            .await
            .map_err(SyncFailure::from_setup_error)?;
        info!(project_key, "Connected to Dataiku project");

        if saved_models.is_empty() {
            info!(project_key, "No saved models found in Dataiku project, nothing to validate");
            return Ok(SyncReport::empty(project_key));
        }

        let registry = self
            .registry
            .connect(&credential)
            .await
            .map_err(SyncFailure::from_setup_error)?;

        let artifacts = collect_model_artifacts(registry.as_ref())
            .await
            .map_err(SyncFailure::from_setup_error)?;

        info!(
            saved_models = saved_models.len(),
            model_artifacts = artifacts.len(),
            "Collected inventories"
        );

        let mut report = SyncReport::new(project_key, saved_models.len(), artifacts.len());
        for model in &saved_models {
            let check = self.check_model(project_key, model, &artifacts).await;
            report.record(check);
        }

        if !report.any_published() {
            info!(
                saved_models = report.saved_models,
                skipped = report.skipped_count(),
                "Cross-reference finished without a match"
            );
            return Err(SyncFailure::NoPublishedModels);
        }

        info!(
            matched = report.matched_count(),
            skipped = report.skipped_count(),
            "Verification complete"
        );
        Ok(report)
    }

    async fn resolve_credential(&self) -> Result<Credential, SyncFailure> {
        match self.credentials.get_credential(&CredentialType::Wandb).await {
            Ok(credential) => Ok(credential),
            Err(DomainError::NotFound { .. }) => Err(SyncFailure::MissingSecret),
            Err(e) => Err(SyncFailure::from_setup_error(e)),
        }
    }

    async fn check_model(
        &self,
        project_key: &str,
        model: &SavedModel,
        artifacts: &[ArtifactSummary],
    ) -> ModelCheck {
        info!(model_id = %model.id, "Checking Dataiku model");

        let version = match self
            .saved_models
            .get_active_version(project_key, &model.id)
            .await
        {
            Ok(Some(version)) => version,
            Ok(None) => {
                warn!(model_id = %model.id, "No active version found for model, skipping");
                return ModelCheck::Skipped {
                    model_id: model.id.clone(),
                    reason: "no active version".to_string(),
                };
            }
            Err(e) => {
                warn!(model_id = %model.id, error = %e, "No active version found for model, skipping");
                return ModelCheck::Skipped {
                    model_id: model.id.clone(),
                    reason: e.to_string(),
                };
            }
        };

        let identifier = ModelIdentifier::new(&self.identifier_prefix, &model.id, &version.id);
        info!(identifier = %identifier, "Searching W&B for model identifier");

        let matches = find_matches(&identifier, artifacts);
        if matches.is_empty() {
            warn!(identifier = %identifier, "No published W&B artifacts found");
            return ModelCheck::Unmatched {
                model_id: model.id.clone(),
                identifier,
            };
        }

        for artifact in &matches {
            info!(artifact = %artifact.name, registry_path = %artifact.path, "Match found");
        }

        ModelCheck::Matched {
            model_id: model.id.clone(),
            identifier,
            artifacts: matches.into_iter().cloned().collect(),
        }
    }
}

/// Walk every registry collection and keep the model-typed artifacts
pub async fn collect_model_artifacts(
    registry: &dyn ModelRegistryProvider,
) -> Result<Vec<ArtifactSummary>, DomainError> {
    let mut artifacts = Vec::new();

    for collection in registry.list_collections().await? {
        let listed = registry.list_artifacts(&collection).await?;
        artifacts.extend(
            listed
                .iter()
                .filter(|artifact| artifact.is_model())
                .map(|artifact| artifact.summary()),
        );
    }

    Ok(artifacts)
}
