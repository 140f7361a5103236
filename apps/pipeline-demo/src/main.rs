//! Pipeline Demo Application
//!
//! Greets a name, sums two integers and reports the parity of the sum.
//! Used as a smoke test for build/test pipelines.
//!
//! # Usage
//!
//! ```bash
//! # Default run
//! pipeline-demo
//!
//! # Override inputs
//! pipeline-demo --name "Release Train" --a 7 --b=-3
//!
//! # JSON output
//! pipeline-demo --json
//!
//! # Validate a config file
//! pipeline-demo --config demo.yaml check
//! ```

// CLI tools are expected to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod config;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use greeter::{Service, run_demo};

use crate::config::{AppConfig, CliOverrides};

/// Pipeline Demo - greeting and arithmetic smoke-test application
#[derive(Parser)]
#[command(name = "pipeline-demo")]
#[command(about = "Pipeline Demo - greeting and arithmetic smoke-test application")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Name to greet (overrides config); a blank value greets a guest
    #[arg(long)]
    name: Option<String>,

    /// Left operand of the sum (overrides config)
    #[arg(long, allow_negative_numbers = true)]
    a: Option<i64>,

    /// Right operand of the sum (overrides config)
    #[arg(long, allow_negative_numbers = true)]
    b: Option<i64>,

    /// Output the demo report as JSON
    #[arg(long)]
    json: bool,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo
    Run,
    /// Validate configuration and exit
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Layered config: defaults -> YAML -> env (APP__*) -> CLI overrides
    let mut config =
        AppConfig::load_or_default(cli.config.as_deref()).context("failed to load configuration")?;
    config.apply_cli_overrides(CliOverrides {
        name: cli.name,
        a: cli.a,
        b: cli.b,
    });

    logging::init_logging(&config.logging.level, cli.verbose);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "pipeline-demo starting");

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(&config, cli.json),
        Commands::Check => check_config(&config),
    }
}

fn run(config: &AppConfig, json: bool) -> Result<()> {
    let service = Service::new();
    let report = run_demo(&service, &config.demo);

    if json {
        let out = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{out}");
    } else {
        for line in report.lines() {
            println!("{line}");
        }
    }

    tracing::info!("pipeline-demo finished");
    Ok(())
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}
