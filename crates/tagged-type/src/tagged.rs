//! # Tagged Types
//!
//! The one abstraction every identifier in this crate is built on.
//!
//! A tagged type is a string newtype that can only be obtained through
//! validation. Each type supplies a capability set by implementing
//! [`TaggedType`]:
//!
//! - `NAME` (and optionally `DESCRIPTION`), used in error messages;
//! - `is_typeof`, a total and pure shape predicate;
//! - optionally `sanitize`, a normalization applied once before validation
//!   (case folding, whitespace removal);
//! - optionally `sanitize_value`, the same for dynamic JSON input (numbers
//!   may be coerced to strings).
//!
//! From that the trait provides the bundle: [`TaggedType::cast`]
//! (sanitize, assert, wrap), [`TaggedType::assert`] (check without
//! transformation) and the `_value` variants for `serde_json::Value` input.
//! The error kind is always [`TypeError<Self>`].
//!
//! ## Declaring a type
//!
//! [`tagged_type!`](crate::tagged_type) generates the newtype with a private
//! field and its standard impls (`Display`, `AsRef<str>`, `Deref`, `FromStr`,
//! `TryFrom`, `Serialize`, and a `Deserialize` that routes through `cast`).
//! Type-specific constants and `parse` / `from_components` live in a regular
//! inherent `impl` next to the declaration.
//!
//! ```
//! use tagged_type::{tagged_type, TaggedType};
//!
//! tagged_type! {
//!     /// A ticket reference such as `TCK-0042`.
//!     pub struct Ticket;
//!
//!     impl TaggedType {
//!         const NAME: &'static str = "ticket";
//!
//!         fn is_typeof(input: &str) -> bool {
//!             input.len() == 8 && input.starts_with("TCK-")
//!         }
//!
//!         fn sanitize(input: &str) -> std::borrow::Cow<'_, str> {
//!             tagged_type::tagged::uppercase(input)
//!         }
//!     }
//! }
//!
//! let ticket = Ticket::cast("tck-0042").unwrap();
//! assert_eq!(ticket, "TCK-0042");
//! assert!(Ticket::cast("nope").is_err());
//! ```

use std::borrow::Cow;

use serde_json::Value;

use crate::error::TypeError;

/// Capability set and derived operations of a validated string type.
pub trait TaggedType: Sized + AsRef<str> {
    /// Stable name of the domain concept.
    const NAME: &'static str;

    /// Optional human-readable description appended to error messages.
    const DESCRIPTION: &'static str = "";

    /// Whether `input` already has the shape of this type.
    ///
    /// Must be pure and must not panic. No sanitization is applied.
    fn is_typeof(input: &str) -> bool;

    /// Normalize `input` before validation. Identity by default.
    fn sanitize(input: &str) -> Cow<'_, str> {
        Cow::Borrowed(input)
    }

    /// Normalize a dynamic value before validation.
    ///
    /// Returns `None` for values that cannot represent this type at all.
    /// By default only JSON strings are accepted and go through
    /// [`TaggedType::sanitize`].
    fn sanitize_value(input: &Value) -> Option<String> {
        input.as_str().map(|s| Self::sanitize(s).into_owned())
    }

    #[doc(hidden)]
    fn from_validated(value: String, seal: Seal) -> Self;

    /// Fail with this type's error iff `input` is not already valid.
    fn assert(input: &str) -> Result<(), TypeError<Self>> {
        if Self::is_typeof(input) {
            Ok(())
        } else {
            Err(TypeError::new(input))
        }
    }

    /// Sanitize, validate, and wrap `input`.
    fn cast(input: impl AsRef<str>) -> Result<Self, TypeError<Self>> {
        let sanitized = Self::sanitize(input.as_ref());
        if let Err(err) = Self::assert(&sanitized) {
            tracing::trace!(type_name = Self::NAME, input = %sanitized, "rejected cast");
            return Err(err);
        }
        Ok(Self::from_validated(sanitized.into_owned(), Seal::new()))
    }

    /// [`TaggedType::is_typeof`] for dynamic input; non-strings are never valid.
    fn is_typeof_value(input: &Value) -> bool {
        input.as_str().is_some_and(Self::is_typeof)
    }

    /// [`TaggedType::assert`] for dynamic input.
    fn assert_value(input: &Value) -> Result<(), TypeError<Self>> {
        match input.as_str() {
            Some(s) => Self::assert(s),
            None => Err(TypeError::new(input.to_string())),
        }
    }

    /// [`TaggedType::cast`] for dynamic input, applying
    /// [`TaggedType::sanitize_value`].
    fn cast_value(input: &Value) -> Result<Self, TypeError<Self>> {
        let Some(sanitized) = Self::sanitize_value(input) else {
            tracing::trace!(type_name = Self::NAME, input = %input, "rejected non-string cast");
            return Err(TypeError::new(input.to_string()));
        };
        Self::cast(sanitized)
    }
}

/// Proof that a value went through validation inside this crate.
///
/// Only this crate can create a `Seal`, so only the provided
/// [`TaggedType`] operations can construct a tagged value.
#[doc(hidden)]
#[derive(Debug)]
pub struct Seal(());

impl Seal {
    pub(crate) const fn new() -> Self {
        Self(())
    }
}

// ---------------------------------------------------------------------------
// Sanitizers shared by the identifier types
// ---------------------------------------------------------------------------

/// Upper-case ASCII letters, borrowing when nothing changes.
pub fn uppercase(input: &str) -> Cow<'_, str> {
    if input.bytes().any(|b| b.is_ascii_lowercase()) {
        Cow::Owned(input.to_ascii_uppercase())
    } else {
        Cow::Borrowed(input)
    }
}

/// Lower-case ASCII letters, borrowing when nothing changes.
pub fn lowercase(input: &str) -> Cow<'_, str> {
    if input.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(input.to_ascii_lowercase())
    } else {
        Cow::Borrowed(input)
    }
}

/// Remove every whitespace character.
pub fn strip_whitespace(input: &str) -> Cow<'_, str> {
    if input.chars().any(char::is_whitespace) {
        Cow::Owned(input.chars().filter(|c| !c.is_whitespace()).collect())
    } else {
        Cow::Borrowed(input)
    }
}

/// Remove whitespace and upper-case, the normalization of compact codes
/// such as BIC, IBAN and BBAN.
pub fn compact_uppercase(input: &str) -> Cow<'_, str> {
    match strip_whitespace(input) {
        Cow::Borrowed(s) => uppercase(s),
        Cow::Owned(s) => Cow::Owned(s.to_ascii_uppercase()),
    }
}

/// Stringify JSON strings and numbers, the input accepted by codes that may
/// be written as numbers.
pub(crate) fn string_or_number(input: &Value) -> Option<String> {
    match input {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Declare a validated string newtype.
///
/// The body is the type's [`TaggedType`] capability set; the macro adds the
/// sealed constructor and the standard trait impls. See the
/// [module documentation](crate::tagged) for an example.
#[macro_export]
macro_rules! tagged_type {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident;

        impl TaggedType {
            $($body:tt)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name(::std::string::String);

        impl $crate::TaggedType for $name {
            $($body)*

            fn from_validated(
                value: ::std::string::String,
                _seal: $crate::tagged::Seal,
            ) -> Self {
                Self(value)
            }
        }

        impl $name {
            /// Access the validated string.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the value, returning the validated string.
            pub fn into_inner(self) -> ::std::string::String {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl ::std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::TypeError<Self>;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::TaggedType>::cast(s)
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::TypeError<Self>;

            fn try_from(value: &str) -> ::std::result::Result<Self, Self::Error> {
                <Self as $crate::TaggedType>::cast(value)
            }
        }

        impl ::std::convert::TryFrom<::std::string::String> for $name {
            type Error = $crate::TypeError<Self>;

            fn try_from(
                value: ::std::string::String,
            ) -> ::std::result::Result<Self, Self::Error> {
                <Self as $crate::TaggedType>::cast(value)
            }
        }

        impl ::std::convert::From<$name> for ::std::string::String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl ::std::cmp::PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl ::std::cmp::PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                <Self as $crate::TaggedType>::cast(raw)
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}
