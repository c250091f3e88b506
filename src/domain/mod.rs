//! Domain layer - Core entities and provider traits

pub mod credentials;
pub mod error;
pub mod registry;
pub mod saved_model;
pub mod sync;

pub use credentials::{AuthInfo, Credential, CredentialProvider, CredentialType, UserSecret};
pub use error::DomainError;
pub use registry::{
    ArtifactSummary, ModelRegistryConnector, ModelRegistryProvider, RegistryArtifact,
    RegistryCollection,
};
pub use saved_model::{SavedModel, SavedModelProvider, SavedModelVersion};
pub use sync::{
    find_matches, ModelCheck, ModelIdentifier, SyncFailure, SyncOutcome, SyncReport,
    DEFAULT_IDENTIFIER_PREFIX, WANDB_SECRET_KEY,
};
