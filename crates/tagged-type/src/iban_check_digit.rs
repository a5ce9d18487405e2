//! IBAN check digits (positions 3 and 4 of an IBAN).

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static CHECK_DIGIT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[0-9]{{{}}}$", IbanCheckDigit::TYPE_LENGTH))
        .expect("check digit regex is valid")
});

crate::tagged_type! {
    /// Two decimal digits. Numbers are accepted as dynamic input and
    /// zero-padded (`5` becomes `"05"`).
    ///
    /// The digits are not verified against the rest of the IBAN.
    pub struct IbanCheckDigit;

    impl TaggedType {
        const NAME: &'static str = "iban_check_digit";

        fn is_typeof(input: &str) -> bool {
            CHECK_DIGIT_REGEX.is_match(input)
        }

        fn sanitize_value(input: &Value) -> Option<String> {
            match input {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(format!(
                    "{:0>width$}",
                    n.to_string(),
                    width = IbanCheckDigit::TYPE_LENGTH
                )),
                _ => None,
            }
        }
    }
}

impl IbanCheckDigit {
    /// Number of check digits.
    pub const TYPE_LENGTH: usize = 2;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaggedType;

    #[test]
    fn accepts_two_digits_including_zero() {
        assert!(IbanCheckDigit::is_typeof("55"));
        assert!(IbanCheckDigit::is_typeof("02"));
        assert!(IbanCheckDigit::is_typeof("00"));
        assert!(!IbanCheckDigit::is_typeof("5"));
        assert!(!IbanCheckDigit::is_typeof("555"));
    }

    #[test]
    fn pads_numbers() {
        let digits = IbanCheckDigit::cast_value(&serde_json::json!(5)).unwrap();
        assert_eq!(digits, "05");
        let digits = IbanCheckDigit::cast_value(&serde_json::json!(89)).unwrap();
        assert_eq!(digits, "89");
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        assert!(IbanCheckDigit::cast_value(&serde_json::json!(123)).is_err());
        assert!(IbanCheckDigit::cast_value(&serde_json::json!(-1)).is_err());
        assert!(IbanCheckDigit::cast_value(&serde_json::json!(1.5)).is_err());
    }

    #[test]
    fn strings_are_not_padded() {
        assert!(IbanCheckDigit::cast("5").is_err());
    }
}
