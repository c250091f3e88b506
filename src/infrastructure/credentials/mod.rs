//! Credential provider implementations

mod dss_secrets_provider;

pub use dss_secrets_provider::DssSecretsCredentialProvider;
