//! Model registry domain

mod artifact;
mod provider;

pub use artifact::{ArtifactSummary, RegistryArtifact, RegistryCollection};
pub use provider::{ModelRegistryConnector, ModelRegistryProvider};

#[cfg(test)]
pub use provider::{MockModelRegistryConnector, MockModelRegistryProvider};
