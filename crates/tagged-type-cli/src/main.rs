//! # tagged CLI entry point
//!
//! Parses command-line arguments, resolves configuration, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tagged_type_cli::check::{run_check, CheckArgs};
use tagged_type_cli::config::{OutputFormat, Settings};
use tagged_type_cli::countries::{run_countries, CountriesArgs};
use tagged_type_cli::parse::{run_parse, ParseArgs};

/// Validate and decompose financial and identity identifiers.
#[derive(Parser, Debug)]
#[command(name = "tagged", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format; overrides the configuration file.
    #[arg(long, value_enum, global = true)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sanitize and validate one identifier (exit 0 valid, 1 invalid).
    Check(CheckArgs),

    /// Decompose a BIC, BBAN, or IBAN into its components.
    Parse(ParseArgs),

    /// List the countries with a registered BBAN parser.
    Countries(CountriesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("tagged CLI starting");

    let result = Settings::resolve(cli.config.as_deref(), cli.output).and_then(|settings| {
        match &cli.command {
            Commands::Check(args) => run_check(args, &settings),
            Commands::Parse(args) => run_parse(args, &settings),
            Commands::Countries(args) => run_countries(args, &settings),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
