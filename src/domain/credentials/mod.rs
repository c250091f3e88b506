//! Credential management domain

mod credential;
mod provider;
mod secret;

pub use credential::{Credential, CredentialType};
pub use provider::CredentialProvider;
pub use secret::{AuthInfo, UserSecret};

#[cfg(test)]
pub use provider::MockCredentialProvider;
