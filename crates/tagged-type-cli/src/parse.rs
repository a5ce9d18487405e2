//! # Parse Subcommand
//!
//! `tagged parse <kind> <input>` decomposes a BIC, BBAN, or IBAN into its
//! components. BBANs need `--country`; IBANs carry their own country. BBAN
//! and IBAN decomposition use the registry from the configuration.
//!
//! Text output prints one `field: value` line per component, nested IBAN
//! BBAN fields as `bban.bankCode: ...`.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde_json::Value;
use tagged_type::{Bic, Iban, TaggedType};

use crate::config::{OutputFormat, Settings};

/// Kinds that have components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParseKind {
    Bic,
    Bban,
    Iban,
}

/// Arguments for the parse subcommand.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Identifier kind.
    #[arg(value_enum)]
    pub kind: ParseKind,

    /// Value to decompose.
    pub input: String,

    /// Country of a BBAN.
    #[arg(long, required_if_eq("kind", "bban"))]
    pub country: Option<String>,
}

/// Decompose the input into its components as a JSON value.
pub fn decompose(args: &ParseArgs, settings: &Settings) -> Result<Value> {
    let components = match args.kind {
        ParseKind::Bic => {
            let bic = Bic::cast(&args.input)?;
            serde_json::to_value(bic.parse()?)?
        }
        ParseKind::Bban => {
            let country = args
                .country
                .as_deref()
                .context("--country is required to parse a BBAN")?;
            serde_json::to_value(settings.registry.parse_by_country(country, &args.input)?)?
        }
        ParseKind::Iban => {
            let iban = Iban::cast(&args.input)?;
            serde_json::to_value(iban.parse_with(&settings.registry)?)?
        }
    };
    Ok(components)
}

/// Render components for printing.
pub fn render(components: &Value, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(components)?),
        OutputFormat::Text => {
            let mut lines = Vec::new();
            text_lines("", components, &mut lines);
            Ok(lines.join("\n"))
        }
    }
}

fn text_lines(prefix: &str, value: &Value, lines: &mut Vec<String>) {
    match value {
        Value::Object(fields) => {
            for (key, field) in fields {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                text_lines(&path, field, lines);
            }
        }
        Value::String(s) => lines.push(format!("{prefix}: {s}")),
        other => lines.push(format!("{prefix}: {other}")),
    }
}

/// Execute the parse subcommand.
pub fn run_parse(args: &ParseArgs, settings: &Settings) -> Result<u8> {
    let components = decompose(args, settings)
        .with_context(|| format!("failed to parse {:?} {}", args.kind, args.input))?;
    println!("{}", render(&components, settings.output)?);
    Ok(0)
}
