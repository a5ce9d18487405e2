//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`:
//!
//! ```yaml
//! # Restrict the BBAN registry to these built-in countries.
//! bban_countries: [CZ, SK, DE]
//! # Default output format: text | json
//! output: json
//! ```
//!
//! Command-line flags override the file. Without a file every built-in
//! country is registered and output is text.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tagged_type::{BbanRegistry, CountryCode};

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Contents of the configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Built-in countries to register. `None` registers all of them.
    #[serde(default)]
    pub bban_countries: Option<Vec<CountryCode>>,
    /// Default output format.
    #[serde(default)]
    pub output: OutputFormat,
}

impl CliConfig {
    /// Read and validate a configuration file.
    ///
    /// Country codes are validated while deserializing, so a typo such as
    /// `CX1` fails here rather than at lookup time.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Build the BBAN registry this configuration asks for.
    pub fn registry(&self) -> Result<BbanRegistry> {
        match &self.bban_countries {
            None => Ok(BbanRegistry::with_builtin_countries()),
            Some(countries) => BbanRegistry::with_countries(countries)
                .context("invalid bban_countries in config"),
        }
    }
}

/// Resolved runtime settings shared by every subcommand.
#[derive(Debug)]
pub struct Settings {
    /// Registry used for BBAN and IBAN decomposition.
    pub registry: BbanRegistry,
    /// Output format after applying the command-line override.
    pub output: OutputFormat,
}

impl Settings {
    /// Load the optional config file and apply the `--output` override.
    pub fn resolve(config: Option<&Path>, output: Option<OutputFormat>) -> Result<Self> {
        let config = match config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        Ok(Self {
            registry: config.registry()?,
            output: output.unwrap_or(config.output),
        })
    }
}
