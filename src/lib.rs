//! DSS → W&B registry sync check
//!
//! Validates that saved models of a Dataiku DSS project have matching
//! artifacts published to a Weights & Biases model registry:
//! - Reads the W&B API key from the DSS user's secrets
//! - Lists saved models and their active versions
//! - Lists model artifacts across every registry collection
//! - Passes when at least one saved model is published

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{AppConfig, SyncTarget};

use std::sync::Arc;

use domain::{SyncFailure, SyncReport};
use infrastructure::credentials::DssSecretsCredentialProvider;
use infrastructure::dss::{DssClientConfig, HttpDssClient};
use infrastructure::services::RegistrySyncService;
use infrastructure::wandb::WandbConnector;

/// Wire the DSS and W&B clients into a sync service
pub fn create_sync_service(
    config: &AppConfig,
    target: &SyncTarget,
) -> Result<RegistrySyncService, SyncFailure> {
    let dss_client = HttpDssClient::new(
        DssClientConfig::new(&target.instance_url, &target.api_token)
            .with_verify_tls(config.dss.verify_tls),
    )
    .map_err(SyncFailure::from_setup_error)?;

    let credentials = DssSecretsCredentialProvider::with_client(dss_client.clone()).with_defaults();
    let registry = WandbConnector::new(config.wandb.clone());

    Ok(RegistrySyncService::new(
        Arc::new(credentials),
        Arc::new(dss_client),
        Arc::new(registry),
    )
    .with_identifier_prefix(&config.sync.identifier_prefix))
}

/// Run the full sync check for `target`
pub async fn run_sync_check(
    config: &AppConfig,
    target: &SyncTarget,
) -> Result<SyncReport, SyncFailure> {
    create_sync_service(config, target)?
        .run(&target.project_key)
        .await
}
