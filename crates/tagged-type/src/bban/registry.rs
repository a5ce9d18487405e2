//! # BBAN Parser Registry
//!
//! Maps ISO country codes to country BBAN parsers. At most one parser per
//! country: registering a country again replaces its parser.
//!
//! The process-wide default registry ([`BbanRegistry::global`]) is built on
//! first use with every built-in country and is read-only afterwards.
//! Callers that need a different country set build their own registry with
//! [`BbanRegistry::new`] or [`BbanRegistry::with_countries`] and pass it to
//! the `_with` variants of the IBAN operations.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use super::{ad, at, cz, de, es, fr, hu, pl, pt, sk};
use super::{Bban, BbanComponents, CountryBban};
use crate::country_code::CountryCode;
use crate::error::BbanError;
use crate::tagged::{self, TaggedType};

static GLOBAL: LazyLock<BbanRegistry> = LazyLock::new(BbanRegistry::with_builtin_countries);

type ParseFn = fn(&str) -> Result<BbanComponents, BbanError>;
type ComposeFn = fn(&BbanComponents) -> Result<Bban, BbanError>;

/// A type-erased country BBAN parser.
#[derive(Clone, Copy)]
pub struct BbanParser {
    country: &'static str,
    length: usize,
    parse: ParseFn,
    compose: ComposeFn,
}

impl BbanParser {
    /// Build a parser from plain functions, for countries without a
    /// [`CountryBban`] type.
    pub fn new(country: &'static str, length: usize, parse: ParseFn, compose: ComposeFn) -> Self {
        Self {
            country,
            length,
            parse,
            compose,
        }
    }

    /// The parser of a [`CountryBban`] type.
    pub fn of<C: CountryBban>() -> Self {
        Self::new(C::COUNTRY, C::TYPE_LENGTH, parse_country::<C>, compose_country::<C>)
    }

    /// Country this parser was built for.
    pub fn country(&self) -> &'static str {
        self.country
    }

    /// BBAN length of the country.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Split a BBAN into components.
    pub fn parse(&self, input: &str) -> Result<BbanComponents, BbanError> {
        (self.parse)(input)
    }

    /// Compose a BBAN from components.
    pub fn compose(&self, components: &BbanComponents) -> Result<Bban, BbanError> {
        (self.compose)(components)
    }
}

impl fmt::Debug for BbanParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BbanParser")
            .field("country", &self.country)
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

fn parse_country<C: CountryBban>(input: &str) -> Result<BbanComponents, BbanError> {
    Ok(C::parse(input)?)
}

fn compose_country<C: CountryBban>(components: &BbanComponents) -> Result<Bban, BbanError> {
    Ok(C::from_components(components)?.to_bban())
}

/// Country code to BBAN parser map.
#[derive(Debug, Clone, Default)]
pub struct BbanRegistry {
    parsers: HashMap<String, BbanParser>,
    /// Countries in registration order.
    order: Vec<String>,
}

impl BbanRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in country.
    pub fn with_builtin_countries() -> Self {
        let mut registry = Self::new();
        ad::register(&mut registry);
        at::register(&mut registry);
        cz::register(&mut registry);
        de::register(&mut registry);
        es::register(&mut registry);
        fr::register(&mut registry);
        hu::register(&mut registry);
        pl::register(&mut registry);
        pt::register(&mut registry);
        sk::register(&mut registry);
        tracing::debug!(countries = registry.len(), "built BBAN registry");
        registry
    }

    /// Create a registry with the listed built-in countries only.
    ///
    /// Fails with [`BbanError::UnsupportedCountry`] for a country without a
    /// built-in definition.
    pub fn with_countries(countries: &[CountryCode]) -> Result<Self, BbanError> {
        let mut registry = Self::new();
        for country in countries {
            let parser =
                Self::builtin(country).ok_or_else(|| BbanError::UnsupportedCountry {
                    country: country.to_string(),
                })?;
            registry.register(country.clone(), parser);
        }
        tracing::debug!(countries = registry.len(), "built BBAN registry");
        Ok(registry)
    }

    /// The process-wide registry with every built-in country.
    pub fn global() -> &'static BbanRegistry {
        &GLOBAL
    }

    /// The built-in parser for `country`, if there is one.
    pub fn builtin(country: &str) -> Option<BbanParser> {
        let parser = match country {
            "AD" => ad::BbanAd::parser(),
            "AT" => at::BbanAt::parser(),
            "CZ" => cz::BbanCz::parser(),
            "DE" => de::BbanDe::parser(),
            "ES" => es::BbanEs::parser(),
            "FR" => fr::BbanFr::parser(),
            "HU" => hu::BbanHu::parser(),
            "PL" => pl::BbanPl::parser(),
            "PT" => pt::BbanPt::parser(),
            "SK" => sk::BbanSk::parser(),
            _ => return None,
        };
        Some(parser)
    }

    /// Register `parser` for `country`, returning the parser it replaced.
    pub fn register(&mut self, country: CountryCode, parser: BbanParser) -> Option<BbanParser> {
        self.insert(country.into_inner(), parser)
    }

    /// Register the parser of a [`CountryBban`] type under its country.
    pub fn register_country<C: CountryBban>(&mut self) -> Option<BbanParser> {
        self.insert(C::COUNTRY.to_string(), C::parser())
    }

    fn insert(&mut self, country: String, parser: BbanParser) -> Option<BbanParser> {
        let previous = self.parsers.insert(country.clone(), parser);
        if previous.is_some() {
            tracing::warn!(%country, "replaced BBAN parser");
        } else {
            tracing::debug!(%country, length = parser.length(), "registered BBAN parser");
            self.order.push(country);
        }
        previous
    }

    /// The parser registered for `country` (case-insensitive).
    ///
    /// Fails with [`BbanError::ParserNotRegistered`], naming the country and
    /// how to register it.
    pub fn lookup(&self, country: &str) -> Result<&BbanParser, BbanError> {
        let country = tagged::uppercase(country);
        self.parsers
            .get(&*country)
            .ok_or_else(|| BbanError::not_registered(&country))
    }

    /// Parse `input` as a BBAN of `country`.
    ///
    /// The input must first be a syntactically valid [`Bban`]
    /// ([`BbanError::Format`] otherwise); then the country parser applies
    /// ([`BbanError::Country`] on a layout mismatch).
    pub fn parse_by_country(
        &self,
        country: &str,
        input: &str,
    ) -> Result<BbanComponents, BbanError> {
        let parser = self.lookup(country)?;
        let bban = Bban::cast(input).map_err(|err| BbanError::format(&err))?;
        parser.parse(&bban)
    }

    /// Compose a BBAN of `country` from `components`.
    pub fn compose_by_country(
        &self,
        country: &str,
        components: &BbanComponents,
    ) -> Result<Bban, BbanError> {
        self.lookup(country)?.compose(components)
    }

    /// Whether a parser is registered for `country` (case-insensitive).
    pub fn contains(&self, country: &str) -> bool {
        self.parsers.contains_key(&*tagged::uppercase(country))
    }

    /// Registered countries in registration order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of registered countries.
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Whether no country is registered.
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bban::{BbanCz, BbanDe};

    fn cz() -> CountryCode {
        CountryCode::cast("CZ").unwrap()
    }

    // -- construction --

    #[test]
    fn builtin_registry_has_ten_countries_in_order() {
        let registry = BbanRegistry::with_builtin_countries();
        let countries: Vec<_> = registry.countries().collect();
        assert_eq!(
            countries,
            ["AD", "AT", "CZ", "DE", "ES", "FR", "HU", "PL", "PT", "SK"]
        );
        assert_eq!(registry.len(), 10);
    }

    #[test]
    fn global_registry_is_builtin() {
        assert_eq!(BbanRegistry::global().len(), 10);
        assert!(BbanRegistry::global().contains("cz"));
    }

    #[test]
    fn with_countries_restricts_set() {
        let registry =
            BbanRegistry::with_countries(&[cz(), CountryCode::cast("DE").unwrap()]).unwrap();
        assert!(registry.contains("CZ"));
        assert!(registry.contains("DE"));
        assert!(!registry.contains("AT"));
    }

    #[test]
    fn with_countries_rejects_unsupported() {
        let err = BbanRegistry::with_countries(&[CountryCode::cast("GB").unwrap()]).unwrap_err();
        assert_eq!(
            err,
            BbanError::UnsupportedCountry {
                country: "GB".to_string()
            }
        );
    }

    // -- register / lookup --

    #[test]
    fn lookup_unregistered_names_country() {
        let registry = BbanRegistry::new();
        let err = registry.lookup("cz").unwrap_err();
        assert_eq!(err, BbanError::not_registered("CZ"));
        assert!(err.to_string().contains("CZ"));
    }

    #[test]
    fn register_replaces_without_error() {
        let mut registry = BbanRegistry::new();
        assert!(registry.register(cz(), BbanCz::parser()).is_none());
        let previous = registry.register(cz(), BbanDe::parser()).unwrap();
        assert_eq!(previous.country(), "CZ");
        assert_eq!(registry.lookup("CZ").unwrap().country(), "DE");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.countries().collect::<Vec<_>>(), ["CZ"]);
    }

    #[test]
    fn register_does_not_affect_other_countries() {
        let mut registry = BbanRegistry::new();
        registry.register_country::<BbanCz>();
        assert!(registry.lookup("DE").is_err());
        registry.register_country::<BbanDe>();
        assert_eq!(registry.lookup("CZ").unwrap().length(), 20);
    }

    // -- parse / compose --

    #[test]
    fn parse_by_country_delegates() {
        let registry = BbanRegistry::with_builtin_countries();
        let parts = registry.parse_by_country("DE", "370400440532013000").unwrap();
        assert_eq!(parts.bank_code, "37040044");
        assert_eq!(parts.account_number, "0532013000");
    }

    #[test]
    fn parse_by_country_format_error() {
        let registry = BbanRegistry::with_builtin_countries();
        let err = registry.parse_by_country("DE", "3704-0044").unwrap_err();
        assert!(matches!(err, BbanError::Format { .. }));
    }

    #[test]
    fn parse_by_country_country_error() {
        let registry = BbanRegistry::with_builtin_countries();
        let err = registry.parse_by_country("DE", "12345").unwrap_err();
        assert_eq!(err.country(), Some("DE"));
        assert!(matches!(err, BbanError::Country { .. }));
    }

    #[test]
    fn custom_parser_from_functions() {
        fn parse(input: &str) -> Result<BbanComponents, BbanError> {
            let (bank, account) = input.split_at(4);
            Ok(BbanComponents::new(bank, account))
        }
        fn compose(components: &BbanComponents) -> Result<Bban, BbanError> {
            let raw = format!("{}{}", components.bank_code, components.account_number);
            Bban::cast(raw).map_err(|err| BbanError::format(&err))
        }

        let mut registry = BbanRegistry::new();
        registry.register(
            CountryCode::cast("GB").unwrap(),
            BbanParser::new("GB", 18, parse, compose),
        );
        let parts = registry.parse_by_country("gb", "NWBK60161331926819").unwrap();
        assert_eq!(parts.bank_code, "NWBK");
        let bban = registry.compose_by_country("GB", &parts).unwrap();
        assert_eq!(bban, "NWBK60161331926819");
    }
}
