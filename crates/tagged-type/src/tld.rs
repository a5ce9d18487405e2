//! Top-level domain label.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::tagged;

static TLD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[a-z0-9]{{1,{}}}$", Tld::MAX_LENGTH)).expect("TLD regex is valid")
});

crate::tagged_type! {
    /// A top-level domain label such as `com` or `cz`, lower case, without
    /// the leading dot.
    pub struct Tld;

    impl TaggedType {
        const NAME: &'static str = "tld";

        fn is_typeof(input: &str) -> bool {
            TLD_REGEX.is_match(input)
        }

        fn sanitize(input: &str) -> Cow<'_, str> {
            tagged::lowercase(input)
        }
    }
}

impl Tld {
    /// Maximum length of a DNS label.
    pub const MAX_LENGTH: usize = 63;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaggedType;

    #[test]
    fn lowercases_before_validation() {
        assert_eq!(Tld::cast("COM").unwrap(), "com");
        assert!(!Tld::is_typeof("COM"));
    }

    #[test]
    fn accepts_digits() {
        assert!(Tld::is_typeof("app0"));
        assert!(Tld::is_typeof("x1"));
    }

    #[test]
    fn length_bounds() {
        assert!(Tld::is_typeof(&"a".repeat(Tld::MAX_LENGTH)));
        assert!(!Tld::is_typeof(&"a".repeat(Tld::MAX_LENGTH + 1)));
        assert!(!Tld::is_typeof(""));
    }

    #[test]
    fn rejects_dots_and_hyphens() {
        assert!(Tld::cast(".com").is_err());
        assert!(Tld::cast("co.uk").is_err());
        assert!(Tld::cast("xn--p1ai").is_err());
    }
}
