//! # BBAN (Basic Bank Account Number)
//!
//! The domestic part of an IBAN. Its structure is country specific, so this
//! module has three layers:
//!
//! - [`Bban`], the country-agnostic type: 1 to 30 upper-case alphanumerics.
//! - [`CountryBban`], implemented by one type per supported country
//!   ([`BbanCz`], [`BbanDe`], ...). Each declares its positional layout as a
//!   table of `(field, width)`; parsing, zero-padded composition, and the
//!   total length are derived from that table.
//! - [`BbanRegistry`], the map from country code to a type-erased
//!   [`BbanParser`], used by [`Bban::parse`] and IBAN decomposition.
//!
//! ## Supported countries
//!
//! | Country | Layout | Length |
//! |---|---|---|
//! | AD | bank(4) branch(4) account(12) | 20 |
//! | AT | bank(5) account(11) | 16 |
//! | CZ | bank(4) prefix(6) account(10) | 20 |
//! | DE | bank(8) account(10) | 18 |
//! | ES | bank(4) branch(4) check(2) account(10) | 20 |
//! | FR | bank(5) branch(5) account(11) check(2) | 23 |
//! | HU | bank(3) branch(4) account(16) check(1) | 24 |
//! | PL | bank(3) branch(4) check(1) account(16) | 24 |
//! | PT | bank(4) branch(4) account(11) check(2) | 21 |
//! | SK | bank(4) account(16) | 20 |

pub mod ad;
pub mod at;
pub mod cz;
pub mod de;
pub mod es;
pub mod fr;
pub mod hu;
pub mod pl;
pub mod pt;
mod registry;
pub mod sk;

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub use ad::BbanAd;
pub use at::BbanAt;
pub use cz::BbanCz;
pub use de::BbanDe;
pub use es::BbanEs;
pub use fr::BbanFr;
pub use hu::BbanHu;
pub use pl::BbanPl;
pub use pt::BbanPt;
pub use registry::{BbanParser, BbanRegistry};
pub use sk::BbanSk;

use crate::error::{BbanError, TypeError};
use crate::tagged::{self, Seal, TaggedType};

static BBAN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "^[A-Z0-9]{{{},{}}}$",
        Bban::MIN_LENGTH,
        Bban::MAX_LENGTH
    ))
    .expect("BBAN regex is valid")
});

crate::tagged_type! {
    /// A BBAN of any country: upper-case alphanumerics without whitespace.
    pub struct Bban;

    impl TaggedType {
        const NAME: &'static str = "bban";

        fn is_typeof(input: &str) -> bool {
            BBAN_REGEX.is_match(input)
        }

        fn sanitize(input: &str) -> Cow<'_, str> {
            tagged::compact_uppercase(input)
        }
    }
}

impl Bban {
    /// Shortest BBAN.
    pub const MIN_LENGTH: usize = 1;

    /// Longest BBAN.
    pub const MAX_LENGTH: usize = 30;

    /// Parse `input` with the parser registered for `country` in the default
    /// registry.
    pub fn parse(country: &str, input: &str) -> Result<BbanComponents, BbanError> {
        BbanRegistry::global().parse_by_country(country, input)
    }

    /// Compose a BBAN for `country` from its components with the default
    /// registry.
    pub fn from_components(
        country: &str,
        components: &BbanComponents,
    ) -> Result<Bban, BbanError> {
        BbanRegistry::global().compose_by_country(country, components)
    }
}

// ── Components ──────────────────────────────────────────────────────────

/// A positional field of a country BBAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BbanField {
    /// Bank identifier.
    BankCode,
    /// Branch identifier.
    BranchCode,
    /// Account number prefix (CZ).
    AccountPrefix,
    /// National check digit(s).
    NationalCheckDigit,
    /// Account number.
    AccountNumber,
}

impl BbanField {
    /// Name of the capture group and of the serialized field.
    pub const fn group_name(self) -> &'static str {
        match self {
            Self::BankCode => "bankCode",
            Self::BranchCode => "branchCode",
            Self::AccountPrefix => "accountPrefix",
            Self::NationalCheckDigit => "nationalCheckDigit",
            Self::AccountNumber => "accountNumber",
        }
    }
}

impl std::fmt::Display for BbanField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.group_name())
    }
}

/// The fields of a country BBAN, as the substrings found at their positions.
///
/// No numeric interpretation is applied: `"0001"` stays `"0001"`. Fields a
/// country does not use are `None`, and are ignored when composing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BbanComponents {
    /// Bank identifier.
    pub bank_code: String,
    /// Branch identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_code: Option<String>,
    /// Account number prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_prefix: Option<String>,
    /// National check digit(s).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_check_digit: Option<String>,
    /// Account number.
    pub account_number: String,
}

impl BbanComponents {
    /// Components with the two fields every country has.
    pub fn new(bank_code: impl Into<String>, account_number: impl Into<String>) -> Self {
        Self {
            bank_code: bank_code.into(),
            account_number: account_number.into(),
            ..Self::default()
        }
    }

    /// Set the branch code.
    pub fn with_branch_code(mut self, branch_code: impl Into<String>) -> Self {
        self.branch_code = Some(branch_code.into());
        self
    }

    /// Set the account prefix.
    pub fn with_account_prefix(mut self, account_prefix: impl Into<String>) -> Self {
        self.account_prefix = Some(account_prefix.into());
        self
    }

    /// Set the national check digit(s).
    pub fn with_national_check_digit(mut self, check_digit: impl Into<String>) -> Self {
        self.national_check_digit = Some(check_digit.into());
        self
    }

    /// The value of `field`, if present.
    pub fn get(&self, field: BbanField) -> Option<&str> {
        match field {
            BbanField::BankCode => Some(&self.bank_code),
            BbanField::BranchCode => self.branch_code.as_deref(),
            BbanField::AccountPrefix => self.account_prefix.as_deref(),
            BbanField::NationalCheckDigit => self.national_check_digit.as_deref(),
            BbanField::AccountNumber => Some(&self.account_number),
        }
    }

    fn set(&mut self, field: BbanField, value: &str) {
        let value = value.to_string();
        match field {
            BbanField::BankCode => self.bank_code = value,
            BbanField::BranchCode => self.branch_code = Some(value),
            BbanField::AccountPrefix => self.account_prefix = Some(value),
            BbanField::NationalCheckDigit => self.national_check_digit = Some(value),
            BbanField::AccountNumber => self.account_number = value,
        }
    }
}

/// `{bankCode: 0800, accountPrefix: 19, accountNumber: 2000145399}`, present
/// fields only.
impl std::fmt::Display for BbanComponents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const FIELDS: [BbanField; 5] = [
            BbanField::BankCode,
            BbanField::BranchCode,
            BbanField::AccountPrefix,
            BbanField::NationalCheckDigit,
            BbanField::AccountNumber,
        ];
        let mut map = f.debug_map();
        for field in FIELDS {
            if let Some(value) = self.get(field) {
                map.entry(&format_args!("{field}"), &format_args!("{value}"));
            }
        }
        map.finish()
    }
}

// ── Country BBAN ────────────────────────────────────────────────────────

/// A country-specific BBAN with a fixed-width, all-digit layout.
pub trait CountryBban: TaggedType {
    /// ISO 3166-1 alpha-2 code of the country.
    const COUNTRY: &'static str;

    /// Fields in positional order with their widths.
    const LAYOUT: &'static [(BbanField, usize)];

    /// Total length, the sum of the layout widths.
    const TYPE_LENGTH: usize = layout_length(Self::LAYOUT);

    /// Anchored regex with one named group per layout field.
    fn pattern() -> &'static Regex;

    /// Split `input` into its fields.
    ///
    /// Whitespace is stripped first. Fails with the country's error (action
    /// `parse`) unless the result is exactly `TYPE_LENGTH` digits.
    fn parse(input: &str) -> Result<BbanComponents, TypeError<Self>> {
        let sanitized = Self::sanitize(input);
        let caps = Self::pattern()
            .captures(&sanitized)
            .ok_or_else(|| TypeError::new(&*sanitized).with_action("parse"))?;

        let mut components = BbanComponents::default();
        for &(field, _) in Self::LAYOUT {
            if let Some(m) = caps.name(field.group_name()) {
                components.set(field, m.as_str());
            }
        }
        Ok(components)
    }

    /// Left-pad each layout field with `'0'` to its width and concatenate.
    ///
    /// Fails (action `compose`) when a layout field is missing or longer than
    /// its width, or when the result is not a valid BBAN of this country.
    fn from_components(components: &BbanComponents) -> Result<Self, TypeError<Self>> {
        let fail = || TypeError::new(components.to_string()).with_action("compose");

        let mut value = String::with_capacity(Self::TYPE_LENGTH);
        for &(field, width) in Self::LAYOUT {
            let part = components.get(field).ok_or_else(fail)?;
            if part.len() > width {
                tracing::debug!(
                    country = Self::COUNTRY,
                    %field,
                    width,
                    part,
                    "BBAN component exceeds its width"
                );
                return Err(fail());
            }
            value.push_str(&format!("{part:0>width$}"));
        }
        Self::cast(value).map_err(|_| fail())
    }

    /// The same value as a country-agnostic [`Bban`].
    fn to_bban(&self) -> Bban {
        Bban::from_validated(self.as_ref().to_string(), Seal::new())
    }

    /// Type-erased parser for registration in a [`BbanRegistry`].
    fn parser() -> BbanParser {
        BbanParser::of::<Self>()
    }
}

/// Sum of the widths of a layout.
pub const fn layout_length(layout: &[(BbanField, usize)]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < layout.len() {
        total += layout[i].1;
        i += 1;
    }
    total
}

fn layout_regex(layout: &[(BbanField, usize)]) -> Regex {
    let groups: String = layout
        .iter()
        .map(|(field, width)| format!("(?<{}>[0-9]{{{}}})", field.group_name(), width))
        .collect();
    Regex::new(&format!("^{groups}$")).expect("BBAN layout regex is valid")
}

fn is_digits_of_length(input: &str, length: usize) -> bool {
    input.len() == length && input.bytes().all(|b| b.is_ascii_digit())
}

/// Declare a country BBAN type, its length constants, and its `register`
/// function.
macro_rules! country_bban {
    (
        $(#[$meta:meta])*
        pub struct $name:ident;
        country = $country:literal;
        name = $type_name:literal;
        layout = [$($field:ident($const_name:ident = $width:literal)),+ $(,)?];
    ) => {
        $crate::tagged_type! {
            $(#[$meta])*
            pub struct $name;

            impl TaggedType {
                const NAME: &'static str = $type_name;

                fn is_typeof(input: &str) -> bool {
                    $crate::bban::is_digits_of_length(
                        input,
                        <$name as $crate::bban::CountryBban>::TYPE_LENGTH,
                    )
                }

                fn sanitize(input: &str) -> ::std::borrow::Cow<'_, str> {
                    $crate::tagged::strip_whitespace(input)
                }
            }
        }

        impl $name {
            $(pub const $const_name: usize = $width;)+
        }

        impl $crate::bban::CountryBban for $name {
            const COUNTRY: &'static str = $country;

            const LAYOUT: &'static [($crate::bban::BbanField, usize)] =
                &[$(($crate::bban::BbanField::$field, $width)),+];

            fn pattern() -> &'static ::regex::Regex {
                static PATTERN: ::std::sync::LazyLock<::regex::Regex> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::bban::layout_regex(
                            <$name as $crate::bban::CountryBban>::LAYOUT,
                        )
                    });
                &PATTERN
            }
        }

        #[doc = concat!("Register the ", $country, " BBAN parser in `registry`.")]
        ///
        /// Returns the parser it replaced, if any.
        pub fn register(
            registry: &mut $crate::bban::BbanRegistry,
        ) -> Option<$crate::bban::BbanParser> {
            registry.register_country::<$name>()
        }
    };
}

pub(crate) use country_bban;

#[cfg(test)]
mod tests {
    use super::*;

    // -- generic BBAN --

    #[test]
    fn generic_bban_sanitizes() {
        let bban = Bban::cast(" ab12 cd34 ").unwrap();
        assert_eq!(bban, "AB12CD34");
    }

    #[test]
    fn generic_bban_length_bounds() {
        assert!(Bban::is_typeof("1"));
        assert!(Bban::is_typeof(&"9".repeat(Bban::MAX_LENGTH)));
        assert!(!Bban::is_typeof(&"9".repeat(Bban::MAX_LENGTH + 1)));
        assert!(!Bban::is_typeof(""));
        assert!(!Bban::is_typeof("12-34"));
    }

    #[test]
    fn generic_parse_uses_default_registry() {
        let parts = Bban::parse("CZ", "0800 0000 0012 3456 7899").unwrap();
        assert_eq!(parts.bank_code, "0800");
        assert_eq!(parts.account_prefix.as_deref(), Some("000000"));
        assert_eq!(parts.account_number, "1234567899");
    }

    #[test]
    fn generic_parse_unknown_country() {
        let err = Bban::parse("GB", "NWBK60161331926819").unwrap_err();
        assert!(matches!(err, BbanError::ParserNotRegistered { .. }));
    }

    #[test]
    fn generic_from_components() {
        let parts = BbanComponents::new("1", "3").with_account_prefix("2");
        let bban = Bban::from_components("cz", &parts).unwrap();
        assert_eq!(bban, "00010000020000000003");
    }

    // -- layout helpers --

    #[test]
    fn layout_length_sums_widths() {
        const LAYOUT: &[(BbanField, usize)] =
            &[(BbanField::BankCode, 4), (BbanField::AccountNumber, 16)];
        assert_eq!(layout_length(LAYOUT), 20);
        assert_eq!(layout_length(&[]), 0);
    }

    #[test]
    fn layout_regex_has_named_groups() {
        let rx = layout_regex(&[(BbanField::BankCode, 2), (BbanField::AccountNumber, 3)]);
        let caps = rx.captures("12345").unwrap();
        assert_eq!(&caps["bankCode"], "12");
        assert_eq!(&caps["accountNumber"], "345");
        assert!(!rx.is_match("123456"));
    }

    // -- components --

    #[test]
    fn components_get_and_builders() {
        let parts = BbanComponents::new("1", "2")
            .with_branch_code("3")
            .with_national_check_digit("4");
        assert_eq!(parts.get(BbanField::BankCode), Some("1"));
        assert_eq!(parts.get(BbanField::BranchCode), Some("3"));
        assert_eq!(parts.get(BbanField::AccountPrefix), None);
        assert_eq!(parts.get(BbanField::NationalCheckDigit), Some("4"));
    }

    #[test]
    fn components_serialize_camel_case_without_absent_fields() {
        let parts = BbanComponents::new("0800", "1234567899").with_account_prefix("000000");
        let json = serde_json::to_value(&parts).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "bankCode": "0800",
                "accountPrefix": "000000",
                "accountNumber": "1234567899",
            })
        );
        let back: BbanComponents = serde_json::from_value(json).unwrap();
        assert_eq!(back, parts);
    }

    #[test]
    fn components_display_lists_present_fields_in_order() {
        let parts = BbanComponents::new("0800", "2000145399").with_account_prefix("19");
        assert_eq!(
            parts.to_string(),
            "{bankCode: 0800, accountPrefix: 19, accountNumber: 2000145399}"
        );
    }

    #[test]
    fn field_display_is_group_name() {
        assert_eq!(BbanField::NationalCheckDigit.to_string(), "nationalCheckDigit");
    }
}
