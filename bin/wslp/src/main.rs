//! wslp is a CLI tool that deploys the wrapped-SLP contract suite to a named
//! target environment.

mod cli;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use comfy_table::Table;

use cli::Cli;
use wslp_deploy::{Deployment, DeploymentReport};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize the logger.
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .init();

    // If a config file is provided, load it and run
    let deployment = if let Some(config_path) = &cli.config {
        let config_path = PathBuf::from(config_path);
        let deployment = Deployment::load_from_file(&config_path)?;

        tracing::info!(
            config_path = %config_path.display(),
            environment = %deployment.environment,
            profile = %deployment.profile,
            "Loading deployment from config file..."
        );

        deployment
    } else {
        // Otherwise, create a new deployment from CLI arguments
        let deployment = Deployment {
            environment: cli.environment,
            rpc_url: cli.rpc_url.parse().context("Invalid RPC URL")?,
            artifacts_dir: PathBuf::from(cli.artifacts_dir),
            profile: cli.profile,
            gas_limit: cli.gas_limit,
        };

        // Save the configuration before running so the run is reproducible
        if !cli.no_save_config {
            deployment.save_config()?;
        }

        deployment
    };

    let report = deployment.deploy().await?;
    print_report(&report);

    report.into_result().map(|_| ())
}

/// Render the per-step outcomes as a table.
fn print_report(report: &DeploymentReport) {
    let mut table = Table::new();
    table.set_header(["Step", "Action", "Outcome"]);

    for (index, step) in report.steps.iter().enumerate() {
        table.add_row([
            (index + 1).to_string(),
            step.description.clone(),
            step.outcome.to_string(),
        ]);
    }

    println!("{table}");
}
