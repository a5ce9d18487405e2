//! Identifier kinds selectable on the command line.

use serde::Serialize;
use tagged_type::{
    Bban, Bic, BicBankCode, BicBranchCode, BicLocationCode, CountryCode, CurrencyCode, Email,
    Iban, IbanCheckDigit, IdentifierResult, Jwt, TaggedType, Tld, Uuid,
};

/// Every identifier type the CLI can check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierKind {
    Email,
    Uuid,
    Jwt,
    Tld,
    CountryCode,
    CurrencyCode,
    IbanCheckDigit,
    BicBankCode,
    BicLocationCode,
    BicBranchCode,
    Bic,
    Iban,
    Bban,
}

impl IdentifierKind {
    /// Sanitize and validate `input` as this kind, returning the canonical
    /// value.
    pub fn cast(self, input: &str) -> IdentifierResult<String> {
        match self {
            Self::Email => cast::<Email>(input),
            Self::Uuid => cast::<Uuid>(input),
            Self::Jwt => cast::<Jwt>(input),
            Self::Tld => cast::<Tld>(input),
            Self::CountryCode => cast::<CountryCode>(input),
            Self::CurrencyCode => cast::<CurrencyCode>(input),
            Self::IbanCheckDigit => cast::<IbanCheckDigit>(input),
            Self::BicBankCode => cast::<BicBankCode>(input),
            Self::BicLocationCode => cast::<BicLocationCode>(input),
            Self::BicBranchCode => cast::<BicBranchCode>(input),
            Self::Bic => cast::<Bic>(input),
            Self::Iban => cast::<Iban>(input),
            Self::Bban => cast::<Bban>(input),
        }
    }
}

fn cast<T: TaggedType>(input: &str) -> IdentifierResult<String> {
    Ok(T::cast(input)?.as_ref().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagged_type::IdentifierError;

    #[test]
    fn cast_returns_sanitized_value() {
        assert_eq!(IdentifierKind::CountryCode.cast("cz").unwrap(), "CZ");
        assert_eq!(IdentifierKind::Tld.cast("COM").unwrap(), "com");
        assert_eq!(
            IdentifierKind::Iban.cast("de89 3704 0044 0532 0130 00").unwrap(),
            "DE89370400440532013000"
        );
    }

    #[test]
    fn cast_error_names_the_type() {
        match IdentifierKind::CurrencyCode.cast("XYZW").unwrap_err() {
            IdentifierError::InvalidType { type_name, .. } => assert_eq!(type_name, "currency_code"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn kinds_parse_from_kebab_case() {
        use clap::ValueEnum;
        let kind = IdentifierKind::from_str("iban-check-digit", false).unwrap();
        assert_eq!(kind, IdentifierKind::IbanCheckDigit);
    }
}
