//! Email address.

use crate::oracle;

crate::tagged_type! {
    /// A syntactically valid email address.
    ///
    /// No sanitization is applied: the address is kept exactly as given.
    pub struct Email;

    impl TaggedType {
        const NAME: &'static str = "email";

        fn is_typeof(input: &str) -> bool {
            oracle::is_email(input)
        }
    }
}

impl Email {
    /// The part before the `@`.
    pub fn local_part(&self) -> &str {
        self.as_str().split_once('@').map_or("", |(local, _)| local)
    }

    /// The part after the `@`.
    pub fn domain(&self) -> &str {
        self.as_str().split_once('@').map_or("", |(_, domain)| domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaggedType;

    #[test]
    fn casts_valid_address_unchanged() {
        let email = Email::cast("John.Doe@Example.com").unwrap();
        assert_eq!(email, "John.Doe@Example.com");
        assert_eq!(email.local_part(), "John.Doe");
        assert_eq!(email.domain(), "Example.com");
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        assert!(Email::cast(" john@example.com").is_err());
    }

    #[test]
    fn rejects_non_string_values() {
        assert!(!Email::is_typeof_value(&serde_json::json!(42)));
        assert!(Email::cast_value(&serde_json::json!(null)).is_err());
    }
}
