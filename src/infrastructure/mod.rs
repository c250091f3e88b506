//! Infrastructure layer - External service implementations

pub mod credentials;
pub mod dss;
pub mod logging;
pub mod services;
pub mod wandb;
