//! capframe - capability framework self-assessment from the terminal

mod cli;
mod commands;

use anyhow::{Context, Result};
use capframe_core::{AppConfig, Session};
use clap::Parser;
use cli::Cli;
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    init_logging(&config.log_filter);

    let mut session = Session::open(&config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(cli.command, &mut session, &config, &mut out)?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => AppConfig::new(),
    };
    if let Some(dir) = &cli.data_dir {
        config = config.with_data_dir(dir.clone());
    }
    Ok(config)
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
