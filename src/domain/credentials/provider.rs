use async_trait::async_trait;
use std::fmt::Debug;

#[cfg(test)]
use mockall::automock;

use super::{Credential, CredentialType};
use crate::domain::DomainError;

/// Trait for credential providers (DSS user secrets, etc.)
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CredentialProvider: Send + Sync + Debug {
    /// Get a credential by its type
    async fn get_credential(&self, credential_type: &CredentialType) -> Result<Credential, DomainError>;
}
