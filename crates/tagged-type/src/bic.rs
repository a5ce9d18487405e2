//! # BIC (Business Identifier Code)
//!
//! `bank(4) + country(2) + location(2) + branch(0 | 3)`, e.g. `HBUKGB4B` or
//! `HBUKGB4BXXX`.
//!
//! Parsing is driven by the sub-types: the decomposition regex is built from
//! [`BicBankCode::TYPE_LENGTH`], [`CountryCode::TYPE_LENGTH`],
//! [`BicLocationCode::TYPE_LENGTH`] and [`BicBranchCode::TYPE_LENGTH`], and
//! every captured group is cast into its sub-type.

mod bank_code;
mod branch_code;
mod location_code;

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub use bank_code::BicBankCode;
pub use branch_code::BicBranchCode;
pub use location_code::BicLocationCode;

use crate::country_code::CountryCode;
use crate::error::TypeError;
use crate::oracle;
use crate::tagged::{self, TaggedType};

static BIC_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "^(?<bankCode>[A-Z]{{{}}})(?<countryCode>[A-Z]{{{}}})\
         (?<locationCode>[A-Z0-9]{{{}}})(?<branchCode>[A-Z0-9]{{{}}})?$",
        BicBankCode::TYPE_LENGTH,
        CountryCode::TYPE_LENGTH,
        BicLocationCode::TYPE_LENGTH,
        BicBranchCode::TYPE_LENGTH,
    ))
    .expect("BIC decomposition regex is valid")
});

crate::tagged_type! {
    /// A SWIFT/BIC code, upper case without whitespace.
    pub struct Bic;

    impl TaggedType {
        const NAME: &'static str = "bic";

        fn is_typeof(input: &str) -> bool {
            oracle::is_bic(input)
        }

        fn sanitize(input: &str) -> Cow<'_, str> {
            tagged::compact_uppercase(input)
        }
    }
}

/// The parts of a [`Bic`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BicComponents {
    /// Institution code.
    pub bank_code: BicBankCode,
    /// Country of the institution.
    pub country_code: CountryCode,
    /// Location code.
    pub location_code: BicLocationCode,
    /// Branch code; absent for 8 character BICs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_code: Option<BicBranchCode>,
}

impl Bic {
    /// Length of a BIC without branch code.
    pub const MIN_LENGTH: usize =
        BicBankCode::TYPE_LENGTH + CountryCode::TYPE_LENGTH + BicLocationCode::TYPE_LENGTH;

    /// Length of a BIC with branch code.
    pub const MAX_LENGTH: usize = Self::MIN_LENGTH + BicBranchCode::TYPE_LENGTH;

    /// Split into bank, country, location and optional branch.
    pub fn parse(&self) -> Result<BicComponents, TypeError<Bic>> {
        let fail = || TypeError::new(self.as_str()).with_action("parse");
        let caps = BIC_PARTS.captures(self.as_str()).ok_or_else(fail)?;
        let group = |name: &str| caps.name(name).map_or("", |m| m.as_str());

        Ok(BicComponents {
            bank_code: BicBankCode::cast(group("bankCode")).map_err(|_| fail())?,
            country_code: CountryCode::cast(group("countryCode")).map_err(|_| fail())?,
            location_code: BicLocationCode::cast(group("locationCode")).map_err(|_| fail())?,
            branch_code: caps
                .name("branchCode")
                .map(|m| BicBranchCode::cast(m.as_str()))
                .transpose()
                .map_err(|_| fail())?,
        })
    }

    /// Concatenate the parts. An absent branch is omitted, not padded.
    pub fn from_components(components: &BicComponents) -> Self {
        let branch = components.branch_code.as_ref().map_or("", |b| b.as_str());
        let value = format!(
            "{}{}{}{}",
            components.bank_code, components.country_code, components.location_code, branch
        );
        Self(value)
    }

    /// The branch code, if the BIC has one.
    pub fn branch_code(&self) -> Option<&str> {
        self.as_str().get(Self::MIN_LENGTH..).filter(|b| !b.is_empty())
    }

    /// Whether the BIC identifies a head office: no branch, or `XXX`.
    pub fn is_head_office(&self) -> bool {
        self.branch_code()
            .map_or(true, |branch| branch == BicBranchCode::HEAD_OFFICE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(branch: Option<&str>) -> BicComponents {
        BicComponents {
            bank_code: BicBankCode::cast("HBUK").unwrap(),
            country_code: CountryCode::cast("GB").unwrap(),
            location_code: BicLocationCode::cast("4B").unwrap(),
            branch_code: branch.map(|b| BicBranchCode::cast(b).unwrap()),
        }
    }

    // -- cast --

    #[test]
    fn sanitizes_before_validation() {
        let bic = Bic::cast(" hbuk gb4b xxx ").unwrap();
        assert_eq!(bic, "HBUKGB4BXXX");
    }

    #[test]
    fn rejects_unknown_country() {
        let err = Bic::cast("HBUKQQ4B").unwrap_err();
        assert_eq!(err.to_string(), "The input HBUKQQ4B is not a valid \"bic\".");
    }

    #[test]
    fn length_constants() {
        assert_eq!(Bic::MIN_LENGTH, 8);
        assert_eq!(Bic::MAX_LENGTH, 11);
    }

    // -- from --

    #[test]
    fn from_without_branch() {
        assert_eq!(Bic::from_components(&components(None)), "HBUKGB4B");
    }

    #[test]
    fn from_with_branch() {
        assert_eq!(Bic::from_components(&components(Some("XXX"))), "HBUKGB4BXXX");
    }

    // -- parse --

    #[test]
    fn parse_eleven_characters() {
        let bic = Bic::cast("HBUKGB4BXXX").unwrap();
        assert_eq!(bic.parse().unwrap(), components(Some("XXX")));
    }

    #[test]
    fn parse_eight_characters_has_no_branch() {
        let bic = Bic::cast("HBUKGB4B").unwrap();
        let parts = bic.parse().unwrap();
        assert_eq!(parts.branch_code, None);
        assert_eq!(Bic::from_components(&parts), bic);
    }

    #[test]
    fn from_parse_is_identity() {
        let bic = Bic::cast("HBUKGB4BXXX").unwrap();
        assert_eq!(Bic::from_components(&bic.parse().unwrap()), bic);
    }

    #[test]
    fn components_serialize_camel_case() {
        let json = serde_json::to_value(components(None)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"bankCode": "HBUK", "countryCode": "GB", "locationCode": "4B"})
        );
    }

    // -- head office --

    #[test]
    fn head_office_detection() {
        assert!(Bic::cast("HBUKGB4B").unwrap().is_head_office());
        assert!(Bic::cast("HBUKGB4BXXX").unwrap().is_head_office());
        let branch = Bic::cast("DEUTDEFF500").unwrap();
        assert!(!branch.is_head_office());
        assert_eq!(branch.branch_code(), Some("500"));
    }
}
