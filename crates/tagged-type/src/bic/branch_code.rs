use std::borrow::Cow;

use serde_json::Value;

use crate::tagged;

crate::tagged_type! {
    /// The branch part of a BIC: three letters or digits. `XXX` is the head
    /// office.
    pub struct BicBranchCode;

    impl TaggedType {
        const NAME: &'static str = "bic_branch_code";

        fn is_typeof(input: &str) -> bool {
            input.len() == BicBranchCode::TYPE_LENGTH
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

impl BicBranchCode {
    /// Length of the branch code.
    pub const TYPE_LENGTH: usize = 3;

    /// Branch code of the head office.
    pub const HEAD_OFFICE: &'static str = "XXX";

    /// The head office branch code as a value.
    pub fn head_office() -> Self {
        Self(Self::HEAD_OFFICE.to_string())
    }

    /// Whether this is the head office branch.
    pub fn is_head_office(&self) -> bool {
        self.as_str() == Self::HEAD_OFFICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaggedType;

    #[test]
    fn head_office() {
        let code = BicBranchCode::cast("xxx").unwrap();
        assert!(code.is_head_office());
        assert_eq!(code, BicBranchCode::head_office());
        assert!(BicBranchCode::is_typeof(BicBranchCode::HEAD_OFFICE));
    }

    #[test]
    fn numbers_are_stringified() {
        let code = BicBranchCode::cast_value(&serde_json::json!(500)).unwrap();
        assert_eq!(code, "500");
        assert!(!code.is_head_office());
        assert!(BicBranchCode::cast_value(&serde_json::json!(5)).is_err());
    }
}
