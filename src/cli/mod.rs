//! CLI module for the DSS → W&B registry sync check

pub mod check;

use clap::{Parser, Subcommand};

/// Checks that Dataiku DSS saved models are published to the W&B model registry
#[derive(Parser)]
#[command(name = "dss-wandb-sync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the sync check against the project named in the environment
    Check(check::CheckArgs),
}
