//! Configuration: ambient settings and the project under check

mod app_config;
mod target;

pub use app_config::{AppConfig, DssConfig, LogFormat, LoggingConfig, SyncConfig, WandbConfig};
pub use target::{SyncTarget, API_TOKEN_VAR, INSTANCE_URL_VAR, PROJECT_KEY_VAR};
