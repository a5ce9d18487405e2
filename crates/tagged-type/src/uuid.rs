//! UUID in canonical hyphenated form.

use crate::oracle;

crate::tagged_type! {
    /// A UUID string such as `67e55044-10b1-426f-9247-bb680e5fe0c8`.
    ///
    /// Any version is accepted, in either case; the case is preserved.
    pub struct Uuid;

    impl TaggedType {
        const NAME: &'static str = "uuid";

        fn is_typeof(input: &str) -> bool {
            oracle::is_uuid(input)
        }
    }
}

impl Uuid {
    /// Length of the hyphenated form.
    pub const TYPE_LENGTH: usize = 36;

    /// Convert to the [`uuid`](::uuid) crate's binary representation.
    ///
    /// Every `Uuid` holds a string `::uuid::Uuid::try_parse` accepts.
    pub fn to_uuid(&self) -> ::uuid::Uuid {
        ::uuid::Uuid::try_parse(self.as_str()).unwrap_or_default()
    }
}

impl From<::uuid::Uuid> for Uuid {
    fn from(value: ::uuid::Uuid) -> Self {
        Self(value.hyphenated().to_string())
    }
}
