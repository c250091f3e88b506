//! Weights & Biases registry client (GraphQL)

mod client;
mod queries;
mod types;

pub use client::{resolve_organization, HttpWandbClient, WandbConnector};
pub use types::Organization;
