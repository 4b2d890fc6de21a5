//! Macros for defining validated Human ID types.

/// Macro to define a validated string newtype.
///
/// The `$validate` function receives the candidate string and returns the
/// [`crate::InvalidReason`] of the first rule it breaks. This generates:
/// - A `KIND` constant used to prefix errors
/// - `new()` to validate and wrap a string without rewriting it
/// - `as_str()` and `into_string()` accessors
/// - `Display`, `FromStr`, `TryFrom<String>` and `TryFrom<&str>` implementations
/// - `Serialize` and `Deserialize` implementations as a plain string
/// - `Ord`, `Hash`, and other standard traits
///
/// # Example
///
/// ```ignore
/// define_human_id!(HumanId, HumanIdKind::HumanId, validate_human_id);
///
/// let id = HumanId::new("My-Phone")?;
/// let parsed: HumanId = "My-Phone".parse()?;
/// ```
macro_rules! define_human_id {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $validate:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// The constructor kind reported in errors.
            pub const KIND: $crate::HumanIdKind = $kind;

            /// Validates `s` and wraps it unchanged.
            ///
            /// Owned strings are moved in without copying.
            pub fn new(s: impl Into<String>) -> Result<Self, $crate::HumanIdError> {
                let s = s.into();
                match $validate(&s) {
                    Ok(()) => Ok(Self(s)),
                    Err(reason) => Err($crate::HumanIdError::new(Self::KIND, s, reason)),
                }
            }

            /// Returns the value as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the value and returns the underlying string.
            #[must_use]
            pub fn into_string(self) -> String {
                self.0
            }

            /// Returns the length of the value in bytes.
            #[must_use]
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Always false, valid values are never empty.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::HumanIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::HumanIdError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::HumanIdError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::new(s).map_err(serde::de::Error::custom)
            }
        }
    };
}
