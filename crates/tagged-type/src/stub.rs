//! # Random Identifier Stubs
//!
//! Generators of random, valid identifiers for tests. Enabled by the `stub`
//! feature. Not suitable for anything but test data: the generator is the
//! thread-local `rand` RNG, not a cryptographic source.
//!
//! Every stub returns a value of the real type, so code under test receives
//! the same type it would in production.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::bban::{Bban, BbanComponents, BbanRegistry, CountryBban};
use crate::bic::{Bic, BicBankCode, BicBranchCode, BicComponents, BicLocationCode};
use crate::country_code::CountryCode;
use crate::email::Email;
use crate::error::{IdentifierResult, TypeError};
use crate::iban::{Iban, IbanComponents};
use crate::iban_check_digit::IbanCheckDigit;
use crate::oracle;
use crate::tagged::{Seal, TaggedType};
use crate::uuid::Uuid;

/// Upper- and lower-case ASCII letters.
pub const ALPHABETICAL_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// ASCII letters and digits.
pub const ALPHANUMERIC_CHARS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

const DIGITS: &str = "0123456789";

const MIN_DEFAULT_LENGTH: usize = 3;
const MAX_DEFAULT_LENGTH: usize = 12;

const EMAIL_LOCAL_DEFAULT_LENGTH: usize = 6;
const EMAIL_DEFAULT_DOMAIN: &str = "example.com";

/// A random string of `length` characters drawn from `charset`.
///
/// `None` picks a length between 3 and 12. An empty `charset` yields an
/// empty string.
pub fn string_stub(length: Option<usize>, charset: &str) -> String {
    let mut rng = rand::thread_rng();
    let length = length.unwrap_or_else(|| rng.gen_range(MIN_DEFAULT_LENGTH..=MAX_DEFAULT_LENGTH));
    let chars: Vec<char> = charset.chars().collect();
    (0..length)
        .filter_map(|_| chars.choose(&mut rng).copied())
        .collect()
}

/// A random ASCII letter, either case.
pub fn alphabetical_char_stub() -> char {
    let chars: Vec<char> = ALPHABETICAL_CHARS.chars().collect();
    chars.choose(&mut rand::thread_rng()).copied().unwrap_or('A')
}

/// A random ISO 3166-1 alpha-2 country code.
pub fn country_code_stub() -> CountryCode {
    let code = oracle::COUNTRY_CODES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("CZ");
    sealed(code.to_string())
}

/// A random BIC bank code.
pub fn bic_bank_code_stub() -> BicBankCode {
    let code = string_stub(Some(BicBankCode::TYPE_LENGTH), ALPHABETICAL_CHARS);
    sealed(code.to_ascii_uppercase())
}

/// A random BIC location code.
pub fn bic_location_code_stub() -> BicLocationCode {
    let code = string_stub(Some(BicLocationCode::TYPE_LENGTH), ALPHANUMERIC_CHARS);
    sealed(code.to_ascii_uppercase())
}

/// A random BIC branch code (never the head office).
pub fn bic_branch_code_stub() -> BicBranchCode {
    loop {
        let code = string_stub(Some(BicBranchCode::TYPE_LENGTH), ALPHANUMERIC_CHARS);
        let code = code.to_ascii_uppercase();
        if code != BicBranchCode::HEAD_OFFICE {
            return sealed(code);
        }
    }
}

/// Fixed parts of a [`bic_stub`]; the rest is random.
#[derive(Debug, Clone, Default)]
pub struct BicOverrides {
    /// Bank code to use.
    pub bank_code: Option<BicBankCode>,
    /// Country code to use.
    pub country_code: Option<CountryCode>,
    /// Location code to use.
    pub location_code: Option<BicLocationCode>,
    /// Branch code to use. `Some(None)` produces an 8 character BIC.
    pub branch_code: Option<Option<BicBranchCode>>,
}

/// A random 11 character BIC, with `overrides` applied.
pub fn bic_stub(overrides: BicOverrides) -> Bic {
    Bic::from_components(&BicComponents {
        bank_code: overrides.bank_code.unwrap_or_else(bic_bank_code_stub),
        country_code: overrides.country_code.unwrap_or_else(country_code_stub),
        location_code: overrides.location_code.unwrap_or_else(bic_location_code_stub),
        branch_code: overrides
            .branch_code
            .unwrap_or_else(|| Some(bic_branch_code_stub())),
    })
}

/// Fixed parts of an [`email_stub`]; the rest is random.
#[derive(Debug, Clone, Default)]
pub struct EmailStubOptions {
    /// Local part (before `@`).
    pub local: Option<String>,
    /// Domain (after `@`). Defaults to `example.com`.
    pub domain: Option<String>,
}

/// A random email address.
///
/// Fails when the options produce an invalid address.
pub fn email_stub(options: EmailStubOptions) -> Result<Email, TypeError<Email>> {
    let local = options
        .local
        .unwrap_or_else(|| string_stub(Some(EMAIL_LOCAL_DEFAULT_LENGTH), ALPHANUMERIC_CHARS));
    let domain = options
        .domain
        .unwrap_or_else(|| EMAIL_DEFAULT_DOMAIN.to_string());
    Email::cast(format!("{local}@{domain}"))
}

/// A random version 4 UUID.
pub fn uuid_stub() -> Uuid {
    Uuid::from(::uuid::Uuid::new_v4())
}

/// A random BBAN of country `C`.
pub fn bban_stub<C: CountryBban>() -> C {
    sealed(string_stub(Some(C::TYPE_LENGTH), DIGITS))
}

/// Random components of a BBAN of country `C`, each field at full width.
pub fn bban_components_stub<C: CountryBban>() -> BbanComponents {
    // A random all-digit string of the country length always parses.
    C::parse(bban_stub::<C>().as_ref()).unwrap_or_default()
}

/// A random IBAN of country `C` with random check digits.
///
/// The check digits are not computed, so the IBAN fails a mod-97 check.
pub fn iban_stub<C: CountryBban>() -> IdentifierResult<Iban> {
    let check_digits: IbanCheckDigit =
        sealed(string_stub(Some(IbanCheckDigit::TYPE_LENGTH), DIGITS));
    let bban: Bban = bban_stub::<C>().to_bban();
    let components = IbanComponents {
        country_code: CountryCode::cast(C::COUNTRY)?,
        check_digits,
        bban: BbanRegistry::global().parse_by_country(C::COUNTRY, &bban)?,
    };
    Iban::from_components(&components)
}

fn sealed<T: TaggedType>(value: String) -> T {
    debug_assert!(T::is_typeof(&value), "stub produced an invalid {}", T::NAME);
    T::from_validated(value, Seal::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bban::{BbanCz, BbanFr, BbanPl};

    #[test]
    fn string_stub_length_and_charset() {
        let s = string_stub(Some(20), "ab");
        assert_eq!(s.len(), 20);
        assert!(s.chars().all(|c| c == 'a' || c == 'b'));

        let s = string_stub(None, ALPHANUMERIC_CHARS);
        assert!((MIN_DEFAULT_LENGTH..=MAX_DEFAULT_LENGTH).contains(&s.len()));
        assert_eq!(string_stub(Some(5), ""), "");
    }

    #[test]
    fn alphabetical_char_is_letter() {
        assert!(alphabetical_char_stub().is_ascii_alphabetic());
    }

    #[test]
    fn bic_parts_are_valid() {
        for _ in 0..50 {
            assert!(CountryCode::is_typeof(&country_code_stub()));
            assert!(BicBankCode::is_typeof(&bic_bank_code_stub()));
            assert!(BicLocationCode::is_typeof(&bic_location_code_stub()));
            let branch = bic_branch_code_stub();
            assert!(BicBranchCode::is_typeof(&branch));
            assert!(!branch.is_head_office());
        }
    }

    #[test]
    fn bic_stub_applies_overrides() {
        let bic = bic_stub(BicOverrides {
            country_code: Some(CountryCode::cast("CZ").unwrap()),
            branch_code: Some(None),
            ..BicOverrides::default()
        });
        assert_eq!(bic.len(), Bic::MIN_LENGTH);
        assert_eq!(&bic[4..6], "CZ");
        assert!(Bic::is_typeof(&bic));
    }

    #[test]
    fn bic_stub_default_has_branch() {
        let bic = bic_stub(BicOverrides::default());
        assert_eq!(bic.len(), Bic::MAX_LENGTH);
        assert!(Bic::is_typeof(&bic));
    }

    #[test]
    fn email_stub_defaults_and_options() {
        let email = email_stub(EmailStubOptions::default()).unwrap();
        assert_eq!(email.domain(), "example.com");
        assert_eq!(email.local_part().len(), EMAIL_LOCAL_DEFAULT_LENGTH);

        let email = email_stub(EmailStubOptions {
            local: Some("jane".into()),
            domain: Some("bank.cz".into()),
        })
        .unwrap();
        assert_eq!(email, "jane@bank.cz");

        assert!(email_stub(EmailStubOptions {
            local: Some("jane".into()),
            domain: Some("bad domain".into()),
        })
        .is_err());
    }

    #[test]
    fn uuid_stub_is_valid() {
        assert!(Uuid::is_typeof(&uuid_stub()));
    }

    #[test]
    fn bban_stubs_are_valid() {
        assert!(BbanCz::is_typeof(&bban_stub::<BbanCz>()));
        assert!(BbanFr::is_typeof(&bban_stub::<BbanFr>()));
        let parts = bban_components_stub::<BbanPl>();
        assert_eq!(parts.bank_code.len(), BbanPl::BANK_CODE_LENGTH);
        assert!(BbanPl::from_components(&parts).is_ok());
    }

    #[test]
    fn iban_stub_parses() {
        let iban = iban_stub::<BbanCz>().unwrap();
        assert!(iban.starts_with("CZ"));
        assert_eq!(iban.len(), 24);
        assert!(iban.parse().is_ok());
    }
}
