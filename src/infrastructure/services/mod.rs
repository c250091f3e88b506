//! Application services

mod sync_service;

pub use sync_service::{collect_model_artifacts, RegistrySyncService};
