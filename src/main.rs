use clap::Parser;
use dss_wandb_sync::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check(args) => cli::check::run(args).await,
    }
}
