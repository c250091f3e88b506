use async_trait::async_trait;
use std::fmt::Debug;

#[cfg(test)]
use mockall::automock;

use super::{SavedModel, SavedModelVersion};
use crate::domain::DomainError;

/// Source of saved models for a project (DSS public API, etc.)
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SavedModelProvider: Send + Sync + Debug {
    /// List the saved models of a project
    async fn list_saved_models(&self, project_key: &str) -> Result<Vec<SavedModel>, DomainError>;

    /// Fetch the active version of a saved model, `None` when no version is active
    async fn get_active_version(
        &self,
        project_key: &str,
        saved_model_id: &str,
    ) -> Result<Option<SavedModelVersion>, DomainError>;
}
