//! # Check Subcommand
//!
//! `tagged check <kind> <input>` sanitizes and validates one value. Exit
//! code 0 when valid, 1 when not. With `--country`, a BBAN is additionally
//! checked against that country's layout.
//!
//! ```bash
//! tagged check iban "CZ65 0800 0000 1920 0014 5399"
//! tagged check bban 080000001920 --country CZ
//! ```

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::config::{OutputFormat, Settings};
use crate::kind::IdentifierKind;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Identifier kind.
    #[arg(value_enum)]
    pub kind: IdentifierKind,

    /// Value to check.
    pub input: String,

    /// Also check a BBAN against this country's layout.
    #[arg(long)]
    pub country: Option<String>,
}

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub kind: IdentifierKind,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckReport {
    fn valid(kind: IdentifierKind, value: String) -> Self {
        Self {
            kind,
            valid: true,
            value: Some(value),
            error: None,
        }
    }

    fn invalid(kind: IdentifierKind, error: impl ToString) -> Self {
        Self {
            kind,
            valid: false,
            value: None,
            error: Some(error.to_string()),
        }
    }

    /// Render for printing.
    pub fn render(&self, output: OutputFormat) -> Result<String> {
        Ok(match output {
            OutputFormat::Json => serde_json::to_string_pretty(self)?,
            OutputFormat::Text => match (&self.value, &self.error) {
                (Some(value), _) => format!("valid: {value}"),
                (None, Some(error)) => format!("invalid: {error}"),
                (None, None) => "invalid".to_string(),
            },
        })
    }
}

/// Validate the input without printing.
pub fn check(args: &CheckArgs, settings: &Settings) -> CheckReport {
    let value = match args.kind.cast(&args.input) {
        Ok(value) => value,
        Err(err) => return CheckReport::invalid(args.kind, err),
    };

    match (&args.country, args.kind) {
        (Some(country), IdentifierKind::Bban) => {
            match settings.registry.parse_by_country(country, &value) {
                Ok(_) => CheckReport::valid(args.kind, value),
                Err(err) => CheckReport::invalid(args.kind, err),
            }
        }
        (Some(_), kind) => {
            tracing::warn!(?kind, "--country only applies to bban; ignored");
            CheckReport::valid(kind, value)
        }
        (None, kind) => CheckReport::valid(kind, value),
    }
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs, settings: &Settings) -> Result<u8> {
    let report = check(args, settings);
    tracing::info!(kind = ?report.kind, valid = report.valid, "checked identifier");
    println!("{}", report.render(settings.output)?);
    Ok(if report.valid { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(kind: IdentifierKind, input: &str, country: Option<&str>) -> CheckArgs {
        CheckArgs {
            kind,
            input: input.to_string(),
            country: country.map(str::to_string),
        }
    }

    fn settings() -> Settings {
        Settings::resolve(None, None).unwrap()
    }

    #[test]
    fn valid_input_reports_sanitized_value() {
        let report = check(&args(IdentifierKind::Bic, "hbuk gb4b", None), &settings());
        assert!(report.valid);
        assert_eq!(report.value.as_deref(), Some("HBUKGB4B"));
        assert_eq!(report.render(OutputFormat::Text).unwrap(), "valid: HBUKGB4B");
    }

    #[test]
    fn invalid_input_reports_error() {
        let report = check(&args(IdentifierKind::Email, "nobody", None), &settings());
        assert!(!report.valid);
        assert_eq!(
            report.render(OutputFormat::Text).unwrap(),
            "invalid: The input nobody is not a valid \"email\"."
        );
    }

    #[test]
    fn bban_checked_against_country() {
        let settings = settings();
        let ok = check(&args(IdentifierKind::Bban, "0800 000019 2000145399", Some("cz")), &settings);
        assert!(ok.valid);

        let short = check(&args(IdentifierKind::Bban, "12345", Some("CZ")), &settings);
        assert!(!short.valid);
        assert!(short.error.unwrap().contains("bban_cz"));

        let unknown = check(&args(IdentifierKind::Bban, "12345", Some("GB")), &settings);
        assert!(!unknown.valid);
    }

    #[test]
    fn json_report_omits_absent_fields() {
        let report = check(&args(IdentifierKind::CountryCode, "cz", None), &settings());
        let json: serde_json::Value =
            serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "country-code", "valid": true, "value": "CZ"})
        );
    }
}
