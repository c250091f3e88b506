//! Check command - runs the sync check once and reports the verdict

use clap::{Args, ValueEnum};

use crate::config::{AppConfig, SyncTarget};
use crate::domain::{ModelCheck, SyncReport};
use crate::infrastructure::logging;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Arguments for the check command
#[derive(Args, Clone)]
pub struct CheckArgs {
    /// How to print the report on stdout
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Run the sync check. A failure is returned to `main`, which prints it once.
pub async fn run(args: CheckArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let target = SyncTarget::from_env()?;
    let report = crate::run_sync_check(&config, &target).await?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", render_text(&report)),
    }

    Ok(())
}

fn render_text(report: &SyncReport) -> String {
    let mut out = format!(
        "Project {}: {} saved model(s), {} model artifact(s)\n",
        report.project_key, report.saved_models, report.model_artifacts
    );

    for check in &report.checks {
        match check {
            ModelCheck::Skipped { model_id, reason } => {
                out.push_str(&format!("  SKIP  {} ({})\n", model_id, reason));
            }
            ModelCheck::Unmatched { model_id, identifier } => {
                out.push_str(&format!("  MISS  {} [{}]\n", model_id, identifier));
            }
            ModelCheck::Matched {
                model_id,
                identifier,
                artifacts,
            } => {
                out.push_str(&format!("  OK    {} [{}]\n", model_id, identifier));
                for artifact in artifacts {
                    out.push_str(&format!("          {} -> {}\n", artifact.name, artifact.path));
                }
            }
        }
    }

    out.push_str("Verification complete.\n");
    out
}
