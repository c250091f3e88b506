//! Dataiku DSS public API client

mod client;

pub use client::{DssAuthClientTrait, DssClientConfig, HttpDssClient};
