//! create-express-app CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use commands::NewCommand;
use console::style;
use create_express_app_lib::prompt::Prefilled;
use create_express_app_lib::{observability, Language, ScaffoldConfig, ScaffoldError};

#[derive(Parser)]
#[command(name = "create-express-app")]
#[command(version)]
#[command(about = "Scaffold a minimal Express.js project", long_about = None)]
struct Cli {
    /// Project name ("." generates into the current directory)
    name: Option<String>,

    /// Language of the generated sources
    #[arg(short, long, value_enum)]
    language: Option<Language>,

    /// Extra npm packages to install (space-separated)
    #[arg(short, long)]
    packages: Option<String>,

    /// Configuration file to load instead of the standard locations
    #[arg(long, value_name = "PATH")]
    config: Option<String>,

    /// Package manager binary (default: npm)
    #[arg(long)]
    package_manager: Option<String>,

    /// Generate files without installing dependencies
    #[arg(long)]
    skip_install: bool,

    /// Accept defaults for every question not given on the command line
    #[arg(short, long)]
    yes: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let failure = Failure::from_error(&err);
            eprintln!();
            eprintln!("{} {}", style("❌").red().bold(), failure.message);
            ExitCode::from(failure.code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    observability::init(cli.verbose)?;

    let mut config = match &cli.config {
        Some(path) => ScaffoldConfig::load_from(path)
            .with_context(|| format!("Failed to load configuration from {path}"))?,
        None => ScaffoldConfig::load().context("Failed to load configuration")?,
    };
    if let Some(package_manager) = cli.package_manager {
        config.package_manager = package_manager;
    }

    let prefilled = Prefilled {
        project_name: cli.name,
        language: cli.language,
        extra_packages: cli.packages,
    };

    NewCommand::new(prefilled, cli.yes, cli.skip_install, config).execute()
}

/// User-facing message and exit code for a failed run
#[derive(Debug, PartialEq, Eq)]
struct Failure {
    code: u8,
    message: String,
}

impl Failure {
    /// Exit code for an existing target directory
    const COLLISION: u8 = 1;
    /// Exit code for every other failure
    const OTHER: u8 = 1;

    fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<ScaffoldError>() {
            Some(collision @ ScaffoldError::Collision { .. }) => Self {
                code: Self::COLLISION,
                message: collision.to_string(),
            },
            _ => Self {
                code: Self::OTHER,
                message: format!("Error: {err:#}"),
            },
        }
    }
}
