//! # IBAN (International Bank Account Number)
//!
//! `country(2) + check digits(2) + BBAN`, where the BBAN length depends on
//! the country. Validation is structural: charset plus the registered
//! length of the country's IBAN. Check digits are not verified.
//!
//! Decomposition splits off the country code and check digits and hands the
//! BBAN to the country parser in a [`BbanRegistry`]. The plain
//! [`Iban::parse`] / [`Iban::from_components`] use the default registry;
//! the `_with` variants take an explicit one.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::bban::{Bban, BbanComponents, BbanRegistry};
use crate::country_code::CountryCode;
use crate::error::{IdentifierResult, TypeError};
use crate::iban_check_digit::IbanCheckDigit;
use crate::oracle;
use crate::tagged::{self, Seal, TaggedType};

static IBAN_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "^(?<countryCode>[A-Z]{{{}}})(?<checkDigits>[0-9]{{{}}})(?<bban>[A-Z0-9]{{{},{}}})$",
        CountryCode::TYPE_LENGTH,
        IbanCheckDigit::TYPE_LENGTH,
        Bban::MIN_LENGTH,
        Bban::MAX_LENGTH,
    ))
    .expect("IBAN decomposition regex is valid")
});

crate::tagged_type! {
    /// An IBAN, upper case without whitespace.
    pub struct Iban;

    impl TaggedType {
        const NAME: &'static str = "iban";

        fn is_typeof(input: &str) -> bool {
            oracle::is_iban(input)
        }

        fn sanitize(input: &str) -> Cow<'_, str> {
            tagged::compact_uppercase(input)
        }
    }
}

/// The parts of an [`Iban`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IbanComponents {
    /// Country of the account.
    pub country_code: CountryCode,
    /// The two check digits.
    pub check_digits: IbanCheckDigit,
    /// The country-specific BBAN fields.
    pub bban: BbanComponents,
}

impl Iban {
    /// Shortest structurally possible IBAN.
    pub const MIN_LENGTH: usize =
        CountryCode::TYPE_LENGTH + IbanCheckDigit::TYPE_LENGTH + Bban::MIN_LENGTH;

    /// Longest structurally possible IBAN.
    pub const MAX_LENGTH: usize =
        CountryCode::TYPE_LENGTH + IbanCheckDigit::TYPE_LENGTH + Bban::MAX_LENGTH;

    /// The country code (first two characters).
    pub fn country_code(&self) -> &str {
        &self.as_str()[..CountryCode::TYPE_LENGTH]
    }

    /// The check digits (third and fourth characters).
    pub fn check_digits(&self) -> &str {
        let start = CountryCode::TYPE_LENGTH;
        &self.as_str()[start..start + IbanCheckDigit::TYPE_LENGTH]
    }

    /// The BBAN (everything after the check digits).
    pub fn bban(&self) -> Bban {
        let start = CountryCode::TYPE_LENGTH + IbanCheckDigit::TYPE_LENGTH;
        Bban::from_validated(self.as_str()[start..].to_string(), Seal::new())
    }

    /// Decompose using the default registry.
    pub fn parse(&self) -> IdentifierResult<IbanComponents> {
        self.parse_with(BbanRegistry::global())
    }

    /// Decompose, parsing the BBAN with the country parser in `registry`.
    ///
    /// Fails with [`BbanError::ParserNotRegistered`] when the country has
    /// no parser, and with [`BbanError::Country`] when the BBAN does not fit
    /// the country layout.
    ///
    /// [`BbanError::ParserNotRegistered`]: crate::BbanError::ParserNotRegistered
    /// [`BbanError::Country`]: crate::BbanError::Country
    pub fn parse_with(&self, registry: &BbanRegistry) -> IdentifierResult<IbanComponents> {
        let caps = IBAN_PARTS
            .captures(self.as_str())
            .ok_or_else(|| TypeError::<Iban>::new(self.as_str()).with_action("parse"))?;
        let group = |name: &str| caps.name(name).map_or("", |m| m.as_str());

        let country_code = CountryCode::cast(group("countryCode"))?;
        let check_digits = IbanCheckDigit::cast(group("checkDigits"))?;
        let bban = registry.parse_by_country(&country_code, group("bban"))?;

        Ok(IbanComponents {
            country_code,
            check_digits,
            bban,
        })
    }

    /// Compose using the default registry.
    pub fn from_components(components: &IbanComponents) -> IdentifierResult<Iban> {
        Self::from_components_with(components, BbanRegistry::global())
    }

    /// Concatenate country code, check digits, and the BBAN composed by the
    /// country parser in `registry`.
    pub fn from_components_with(
        components: &IbanComponents,
        registry: &BbanRegistry,
    ) -> IdentifierResult<Iban> {
        let bban = registry.compose_by_country(&components.country_code, &components.bban)?;
        let raw = format!("{}{}{}", components.country_code, components.check_digits, bban);
        Self::cast(raw).map_err(|err| err.with_action("compose").into())
    }
}
