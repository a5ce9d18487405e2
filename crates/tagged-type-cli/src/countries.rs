//! `tagged countries`: list the countries with a registered BBAN parser.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tagged_type::BbanRegistry;

use crate::config::{OutputFormat, Settings};

/// Arguments for the countries subcommand.
#[derive(Args, Debug)]
pub struct CountriesArgs {}

/// One registered country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryEntry {
    pub country: String,
    pub bban_length: usize,
}

/// Registered countries in registration order.
pub fn list(registry: &BbanRegistry) -> Vec<CountryEntry> {
    registry
        .countries()
        .filter_map(|country| {
            let parser = registry.lookup(country).ok()?;
            Some(CountryEntry {
                country: country.to_string(),
                bban_length: parser.length(),
            })
        })
        .collect()
}

/// Execute the countries subcommand.
pub fn run_countries(_args: &CountriesArgs, settings: &Settings) -> Result<u8> {
    let entries = list(&settings.registry);
    match settings.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => {
            println!("Registered BBAN countries:");
            println!();
            for entry in &entries {
                println!("  {:<4} {:>2} digits", entry.country, entry.bban_length);
            }
            println!();
            println!("Total: {} countries", entries.len());
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagged_type::bban::BbanSk;

    #[test]
    fn lists_builtin_countries_in_order() {
        let entries = list(&BbanRegistry::with_builtin_countries());
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0].country, "AD");
        assert_eq!(entries[5].country, "FR");
        assert_eq!(entries[5].bban_length, 23);
    }

    #[test]
    fn lists_only_registered() {
        let mut registry = BbanRegistry::new();
        assert!(list(&registry).is_empty());
        registry.register_country::<BbanSk>();
        assert_eq!(
            list(&registry),
            [CountryEntry {
                country: "SK".to_string(),
                bban_length: 20
            }]
        );
    }
}
