//! JSON Web Token (structure only).

use crate::oracle;

crate::tagged_type! {
    /// A compact-serialized JWT: `header.payload.signature`, each segment
    /// base64url encoded. The signature is not verified.
    pub struct Jwt;

    impl TaggedType {
        const NAME: &'static str = "jwt";

        fn is_typeof(input: &str) -> bool {
            oracle::is_jwt(input)
        }
    }
}

impl Jwt {
    /// The three segments, in order. The signature may be empty.
    pub fn segments(&self) -> (&str, &str, &str) {
        let mut parts = self.as_str().splitn(3, '.');
        (
            parts.next().unwrap_or_default(),
            parts.next().unwrap_or_default(),
            parts.next().unwrap_or_default(),
        )
    }
}
