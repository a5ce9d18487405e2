//! ISO 3166-1 alpha-2 country code.

use std::borrow::Cow;

use crate::{oracle, tagged};

crate::tagged_type! {
    /// An ISO 3166-1 alpha-2 country code, upper case.
    pub struct CountryCode;

    impl TaggedType {
        const NAME: &'static str = "country_code";

        fn is_typeof(input: &str) -> bool {
            oracle::is_country_code(input)
        }

        fn sanitize(input: &str) -> Cow<'_, str> {
            tagged::uppercase(input)
        }
    }
}

impl CountryCode {
    /// Length of every country code.
    pub const TYPE_LENGTH: usize = 2;

    /// Every known country code, in alphabetical order.
    pub fn all() -> impl Iterator<Item = CountryCode> {
        oracle::COUNTRY_CODES.iter().map(|code| Self((*code).to_string()))
    }
}
