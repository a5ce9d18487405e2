use std::borrow::Cow;

use serde_json::Value;

use crate::tagged;

crate::tagged_type! {
    /// The location part of a BIC: two letters or digits.
    pub struct BicLocationCode;

    impl TaggedType {
        const NAME: &'static str = "bic_location_code";

        fn is_typeof(input: &str) -> bool {
            input.len() == BicLocationCode::TYPE_LENGTH
                && input.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        }

        fn sanitize(input: &str) -> Cow<'_, str> {
            tagged::uppercase(input)
        }

        fn sanitize_value(input: &Value) -> Option<String> {
            tagged::string_or_number(input).map(|s| tagged::uppercase(&s).into_owned())
        }
    }
}

impl BicLocationCode {
    /// Length of the location code.
    pub const TYPE_LENGTH: usize = 2;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaggedType;

    #[test]
    fn alphanumeric() {
        assert_eq!(BicLocationCode::cast("4b").unwrap(), "4B");
        assert!(BicLocationCode::cast("4").is_err());
        assert!(BicLocationCode::cast("4-").is_err());
    }

    #[test]
    fn numbers_are_stringified() {
        let code = BicLocationCode::cast_value(&serde_json::json!(22)).unwrap();
        assert_eq!(code, "22");
    }
}
