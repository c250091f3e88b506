use serde::{Deserialize, Serialize};

const MODEL_ARTIFACT_TYPE: &str = "model";

/// A named grouping of artifacts inside a registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryCollection {
    /// Collection name, e.g. `churn-classifier`
    pub name: String,
    /// Registry project holding the collection, e.g. `wandb-registry-model`
    pub registry: String,
    /// Organization entity owning the registry
    pub entity: String,
}

impl RegistryCollection {
    pub fn new(
        entity: impl Into<String>,
        registry: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            registry: registry.into(),
            entity: entity.into(),
        }
    }
}

/// An artifact version linked into a registry collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryArtifact {
    /// Artifact type as reported by the registry (`model`, `dataset`, ...)
    pub artifact_type: Option<String>,
    /// Name of the artifact in the project it was logged from, e.g. `dataiku-m1-v2:v0`
    pub source_name: String,
    /// Fully qualified registry path, e.g. `acme/wandb-registry-model/churn:v3`
    pub qualified_name: String,
}

impl RegistryArtifact {
    pub fn new(
        artifact_type: impl Into<String>,
        source_name: impl Into<String>,
        qualified_name: impl Into<String>,
    ) -> Self {
        Self {
            artifact_type: Some(artifact_type.into()),
            source_name: source_name.into(),
            qualified_name: qualified_name.into(),
        }
    }

    pub fn is_model(&self) -> bool {
        self.artifact_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case(MODEL_ARTIFACT_TYPE))
    }

    pub fn summary(&self) -> ArtifactSummary {
        ArtifactSummary {
            name: self.source_name.clone(),
            path: self.qualified_name.clone(),
        }
    }
}

/// The reduced form of a model artifact used for matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSummary {
    pub name: String,
    pub path: String,
}

impl ArtifactSummary {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}
