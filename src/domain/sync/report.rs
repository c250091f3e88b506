use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ModelIdentifier;
use crate::domain::registry::ArtifactSummary;

/// Result of checking one saved model against the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ModelCheck {
    /// No active version could be resolved
    Skipped { model_id: String, reason: String },
    Unmatched {
        model_id: String,
        identifier: ModelIdentifier,
    },
    Matched {
        model_id: String,
        identifier: ModelIdentifier,
        artifacts: Vec<ArtifactSummary>,
    },
}

impl ModelCheck {
    pub fn model_id(&self) -> &str {
        match self {
            Self::Skipped { model_id, .. }
            | Self::Unmatched { model_id, .. }
            | Self::Matched { model_id, .. } => model_id,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncOutcome {
    /// The project has no saved models
    NothingToValidate,
    /// At least one saved model has a registry artifact
    Published,
    NotPublished,
}

/// Summary of a full sync check
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub project_key: String,
    pub saved_models: usize,
    pub model_artifacts: usize,
    pub checks: Vec<ModelCheck>,
    pub checked_at: DateTime<Utc>,
}

impl SyncReport {
    pub fn new(project_key: impl Into<String>, saved_models: usize, model_artifacts: usize) -> Self {
        Self {
            project_key: project_key.into(),
            saved_models,
            model_artifacts,
            checks: Vec::new(),
            checked_at: Utc::now(),
        }
    }

    /// Report for a project without saved models
    pub fn empty(project_key: impl Into<String>) -> Self {
        Self::new(project_key, 0, 0)
    }

    pub fn record(&mut self, check: ModelCheck) {
        self.checks.push(check);
    }

    pub fn any_published(&self) -> bool {
        self.checks.iter().any(ModelCheck::is_matched)
    }

    pub fn matched_count(&self) -> usize {
        self.checks.iter().filter(|c| c.is_matched()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| matches!(c, ModelCheck::Skipped { .. }))
            .count()
    }

    pub fn outcome(&self) -> SyncOutcome {
        if self.saved_models == 0 {
            SyncOutcome::NothingToValidate
        } else if self.any_published() {
            SyncOutcome::Published
        } else {
            SyncOutcome::NotPublished
        }
    }
}
