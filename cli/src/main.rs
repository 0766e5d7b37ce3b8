// webutil entry point
mod args;
mod cmd;
mod config;

use anyhow::{Context, Result};
use args::{Cli, Commands};
use clap::Parser;
use cmd::remove::Target;
use config::AppConfig;
use files::{local_path_from_file_url, Removal, Remover};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let app_config = match &cli.config {
        Some(path) => AppConfig::load_from(path).with_context(|| format!("loading {}", path.display()))?,
        None => AppConfig::load_default()?,
    };
    tracing::debug!(version = %app_config.version, locale = %app_config.locale, "Loaded configuration");

    match cli.command {
        Commands::Convert(args) => {
            println!("{}", cmd::conversion::run(&args, &app_config)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Remove(args) => remove(&args.paths, Target::File, &app_config).await,
        Commands::RemoveFolder(args) => remove(&args.paths, Target::Folder, &app_config).await,
        Commands::UrlPath { url } => {
            let path = local_path_from_file_url(&url).with_context(|| format!("'{url}' is not a local file URL"))?;
            println!("{}", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn remove(paths: &[std::path::PathBuf], target: Target, app_config: &AppConfig) -> Result<ExitCode> {
    let results = cmd::remove::run(paths, target, Remover::new(app_config.removal)).await;
    let mut failed = false;
    for (path, outcome) in &results {
        println!("{}\t{}", outcome.as_str(), path.display());
        failed |= matches!(outcome, Removal::Failed | Removal::NotAFile);
    }
    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
