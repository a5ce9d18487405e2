//! # tagged-type: Validated Financial & Identity Identifiers
//!
//! Branded string types for the identifiers that flow through payment and
//! onboarding systems: IBAN, per-country BBAN, BIC and its parts, ISO country
//! and currency codes, email, JWT, UUID, top-level domains, and IBAN check
//! digits.
//!
//! Every type is a newtype over `String` with a private field. The only way
//! to obtain one is [`TaggedType::cast`] (sanitize, then validate) or a
//! `from_components` constructor that validates its output. Once you hold an
//! [`Iban`], it is a syntactically valid IBAN.
//!
//! ## Key Design Principles
//!
//! 1. **One factory, many types.** Each identifier declares a capability set
//!    (`NAME`, `is_typeof`, optional `sanitize`) through [`tagged_type!`]; the
//!    [`TaggedType`] trait derives `cast`, `assert`, and the dynamic-input
//!    variants from it.
//!
//! 2. **One error kind per type.** Rejections are [`TypeError<T>`], so an
//!    invalid email and an invalid IBAN are different types. BBAN failures
//!    also convert into [`BbanError`], matchable per country.
//!
//! 3. **Structure is data.** Country BBAN layouts are tables of
//!    `(field, width)`; the parsing regex, the zero-padding `from_components`,
//!    and the length constants are all derived from the table.
//!
//! 4. **Explicit registry.** Country BBAN parsers live in a [`BbanRegistry`]
//!    built by an explicit initialization routine. The process-wide default
//!    registry is built once and is read-only afterwards.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests and static regex
//!   construction.
//! - No checksum (mod-97) verification; validation is structural only.

pub mod bban;
pub mod bic;
pub mod country_code;
pub mod currency_code;
pub mod email;
pub mod error;
pub mod iban;
pub mod iban_check_digit;
pub mod jwt;
pub mod oracle;
#[cfg(feature = "stub")]
pub mod stub;
pub mod tagged;
pub mod tld;
pub mod uuid;

// Re-export primary types for ergonomic imports.
pub use bban::{Bban, BbanComponents, BbanField, BbanParser, BbanRegistry, CountryBban};
pub use bic::{Bic, BicBankCode, BicBranchCode, BicComponents, BicLocationCode};
pub use country_code::CountryCode;
pub use currency_code::CurrencyCode;
pub use email::Email;
pub use error::{BbanError, IdentifierError, IdentifierResult, TypeError};
pub use iban::{Iban, IbanComponents};
pub use iban_check_digit::IbanCheckDigit;
pub use jwt::Jwt;
pub use tagged::TaggedType;
pub use tld::Tld;
pub use crate::uuid::Uuid;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
