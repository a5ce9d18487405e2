//! ISO 4217 currency code.

use std::borrow::Cow;

use crate::{oracle, tagged};

crate::tagged_type! {
    /// An ISO 4217 alphabetic currency code, upper case.
    pub struct CurrencyCode;

    impl TaggedType {
        const NAME: &'static str = "currency_code";

        fn is_typeof(input: &str) -> bool {
            oracle::is_currency_code(input)
        }

        fn sanitize(input: &str) -> Cow<'_, str> {
            tagged::uppercase(input)
        }
    }
}

impl CurrencyCode {
    /// Length of every currency code.
    pub const TYPE_LENGTH: usize = 3;
}
