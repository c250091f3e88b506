use async_trait::async_trait;
use std::fmt::Debug;

#[cfg(test)]
use mockall::automock;

use super::{RegistryArtifact, RegistryCollection};
use crate::domain::{Credential, DomainError};

/// An authenticated session against a model registry
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ModelRegistryProvider: Send + Sync + Debug {
    /// List every collection across the registries visible to the session
    async fn list_collections(&self) -> Result<Vec<RegistryCollection>, DomainError>;

    /// List the artifacts linked into one collection
    async fn list_artifacts(
        &self,
        collection: &RegistryCollection,
    ) -> Result<Vec<RegistryArtifact>, DomainError>;
}

/// Opens registry sessions from a resolved credential
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ModelRegistryConnector: Send + Sync + Debug {
    async fn connect(
        &self,
        credential: &Credential,
    ) -> Result<Box<dyn ModelRegistryProvider>, DomainError>;
}
