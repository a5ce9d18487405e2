//! # Error Taxonomy
//!
//! Every validated identifier type has its own error kind, [`TypeError<T>`].
//! The type parameter makes "an invalid email" and "an invalid IBAN" distinct
//! types at compile time while sharing one implementation: the message, the
//! rejected input, and the optional failed action are carried the same way
//! for every identifier.
//!
//! BBAN failures are additionally grouped under [`BbanError`] so callers can
//! handle them at two granularities: any BBAN problem, or the problem of one
//! specific country (`BbanError::Country { country: "CZ", .. }`).
//!
//! [`IdentifierError`] is the crate-level aggregate for callers that want a
//! single error type across identifiers.

use std::fmt;
use std::marker::PhantomData;

use thiserror::Error;

use crate::bban::{Bban, BbanRegistry, CountryBban};
use crate::tagged::TaggedType;

/// The error returned when an input is not a valid `T`.
///
/// Constructible by callers (`TypeError::<Email>::new("x")`) so that guard
/// code can raise the same error kind the constructors do.
pub struct TypeError<T> {
    input: String,
    action: Option<&'static str>,
    _type: PhantomData<fn() -> T>,
}

impl<T: TaggedType> TypeError<T> {
    /// Create the error for a rejected input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            action: None,
            _type: PhantomData,
        }
    }

    /// Attach the operation that failed (e.g. `"parse"`, `"compose"`).
    ///
    /// The action is rendered as a prefix of the message.
    pub fn with_action(mut self, action: &'static str) -> Self {
        self.action = Some(action);
        self
    }

    /// The rejected input, after sanitization.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The operation that failed, if one was recorded.
    pub fn action(&self) -> Option<&'static str> {
        self.action
    }

    /// Name of the identifier type that rejected the input.
    pub fn type_name(&self) -> &'static str {
        T::NAME
    }
}

impl<T: TaggedType> fmt::Display for TypeError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = format!(
            "{} The input {} is not a valid \"{}\". {}",
            self.action.map(failed_action).unwrap_or_default(),
            self.input,
            T::NAME,
            T::DESCRIPTION,
        );
        f.write_str(message.trim())
    }
}

fn failed_action(action: &'static str) -> String {
    format!("Failed to {action}.")
}

impl<T: TaggedType> fmt::Debug for TypeError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeError")
            .field("type_name", &T::NAME)
            .field("input", &self.input)
            .field("action", &self.action)
            .finish()
    }
}

impl<T> Clone for TypeError<T> {
    fn clone(&self) -> Self {
        Self {
            input: self.input.clone(),
            action: self.action,
            _type: PhantomData,
        }
    }
}

impl<T> PartialEq for TypeError<T> {
    fn eq(&self, other: &Self) -> bool {
        self.input == other.input && self.action == other.action
    }
}

impl<T> Eq for TypeError<T> {}

impl<T: TaggedType> std::error::Error for TypeError<T> {}

/// Errors from BBAN validation, parsing, and the country parser registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BbanError {
    /// The input does not follow the positional layout of a country's BBAN.
    #[error("{message}")]
    Country {
        /// ISO 3166-1 alpha-2 code of the country whose layout rejected the input.
        country: &'static str,
        /// The rejected input.
        input: String,
        /// Rendered message of the country-specific type error.
        message: String,
    },

    /// The input is not a syntactically valid BBAN of any country.
    #[error("{message}")]
    Format {
        /// The rejected input.
        input: String,
        /// Rendered message of the generic BBAN type error.
        message: String,
    },

    /// No parser is registered for the requested country.
    #[error(
        "no BBAN parser registered for country code {country}; register one with \
         BbanRegistry::register{builtin}"
    )]
    ParserNotRegistered {
        /// The country code that was looked up.
        country: String,
        /// Pointer to the built-in `register` function, empty when the
        /// country has no built-in parser.
        builtin: String,
    },

    /// A configured country has no built-in BBAN definition.
    #[error("country code {country} has no built-in BBAN definition")]
    UnsupportedCountry {
        /// The requested country code.
        country: String,
    },
}

impl BbanError {
    /// Build the error for a lookup of an unregistered country.
    pub fn not_registered(country: &str) -> Self {
        let builtin = match BbanRegistry::builtin(country) {
            Some(_) => format!(
                " (built-in: tagged_type::bban::{}::register)",
                country.to_ascii_lowercase()
            ),
            None => String::new(),
        };
        Self::ParserNotRegistered {
            country: country.to_string(),
            builtin,
        }
    }

    /// Build the error for an input that is not a BBAN of any country.
    pub fn format(err: &TypeError<Bban>) -> Self {
        Self::Format {
            input: err.input().to_string(),
            message: err.to_string(),
        }
    }

    /// The country the error is about, if it is country specific.
    pub fn country(&self) -> Option<&str> {
        match self {
            Self::Country { country, .. } => Some(*country),
            Self::ParserNotRegistered { country, .. } | Self::UnsupportedCountry { country } => {
                Some(country.as_str())
            }
            Self::Format { .. } => None,
        }
    }
}

impl<C: CountryBban> From<TypeError<C>> for BbanError {
    fn from(err: TypeError<C>) -> Self {
        Self::Country {
            country: C::COUNTRY,
            message: err.to_string(),
            input: err.input,
        }
    }
}

/// Crate-level error aggregating every identifier failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// A value was rejected by an identifier type.
    #[error("{message}")]
    InvalidType {
        /// Name of the identifier type.
        type_name: &'static str,
        /// The rejected input.
        input: String,
        /// Rendered message of the type error.
        message: String,
    },

    /// BBAN validation or registry failure.
    #[error(transparent)]
    Bban(#[from] BbanError),
}

impl<T: TaggedType> From<TypeError<T>> for IdentifierError {
    fn from(err: TypeError<T>) -> Self {
        Self::InvalidType {
            type_name: T::NAME,
            message: err.to_string(),
            input: err.input,
        }
    }
}

/// Convenience alias used across the crate.
pub type IdentifierResult<T> = Result<T, IdentifierError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bban::BbanCz;
    use crate::{Email, Iban};

    #[test]
    fn type_error_names_type_and_input() {
        let err = TypeError::<Email>::new("not-an-email");
        let msg = err.to_string();
        assert_eq!(msg, "The input not-an-email is not a valid \"email\".");
        assert_eq!(err.type_name(), "email");
        assert_eq!(err.input(), "not-an-email");
    }

    #[test]
    fn type_error_action_prefix() {
        let err = TypeError::<Iban>::new("XX").with_action("parse");
        assert_eq!(err.action(), Some("parse"));
        assert!(err.to_string().starts_with("Failed to parse. The input XX"));
    }

    #[test]
    fn country_type_error_converts_to_bban_error() {
        let err: BbanError = TypeError::<BbanCz>::new("123").into();
        assert_eq!(err.country(), Some("CZ"));
        match err {
            BbanError::Country { country, input, message } => {
                assert_eq!(country, "CZ");
                assert_eq!(input, "123");
                assert!(message.contains("bban_cz"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn not_registered_points_to_builtin_module() {
        let msg = BbanError::not_registered("CZ").to_string();
        assert!(msg.contains("CZ"));
        assert!(msg.ends_with("(built-in: tagged_type::bban::cz::register)"));
    }

    #[test]
    fn not_registered_without_builtin_has_no_module_hint() {
        let msg = BbanError::not_registered("GB").to_string();
        assert_eq!(
            msg,
            "no BBAN parser registered for country code GB; register one with \
             BbanRegistry::register"
        );
        assert!(!msg.contains("bban::gb"));
    }

    #[test]
    fn identifier_error_from_type_error() {
        let err: IdentifierError = TypeError::<Bban>::new("??").into();
        match err {
            IdentifierError::InvalidType { type_name, input, .. } => {
                assert_eq!(type_name, "bban");
                assert_eq!(input, "??");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn format_error_carries_generic_message() {
        let err = BbanError::format(&TypeError::<Bban>::new("12-34"));
        assert_eq!(err.country(), None);
        assert_eq!(err.to_string(), "The input 12-34 is not a valid \"bban\".");
    }

    #[test]
    fn identifier_error_wraps_bban_error_transparently() {
        let inner = BbanError::not_registered("GB");
        let err = IdentifierError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn type_errors_compare_by_input_and_action() {
        let a = TypeError::<Email>::new("x");
        let b = TypeError::<Email>::new("x");
        assert_eq!(a, b);
        assert_ne!(a, b.with_action("compose"));
    }
}
