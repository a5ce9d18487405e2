use std::borrow::Cow;

use crate::tagged;

crate::tagged_type! {
    /// The institution part of a BIC: four letters.
    pub struct BicBankCode;

    impl TaggedType {
        const NAME: &'static str = "bic_bank_code";

        fn is_typeof(input: &str) -> bool {
            input.len() == BicBankCode::TYPE_LENGTH
                && input.bytes().all(|b| b.is_ascii_uppercase())
        }

        fn sanitize(input: &str) -> Cow<'_, str> {
            tagged::uppercase(input)
        }
    }
}

impl BicBankCode {
    /// Length of the bank code.
    pub const TYPE_LENGTH: usize = 4;
}
