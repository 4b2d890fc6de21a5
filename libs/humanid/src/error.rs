//! Error types for Human ID validation and normalization.

use std::fmt;

use thiserror::Error;

/// A hostname label rule violation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("bad hostname label rune {rune:?}")]
pub struct LabelError {
    /// The offending rune.
    pub rune: char,

    /// Byte index of the offending rune within the label.
    pub index: usize,
}

/// Which constructor rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HumanIdKind {
    /// [`crate::HumanId::new`].
    HumanId,

    /// [`crate::HumanIdLower::new`].
    Lower,

    /// [`crate::HumanIdParser::parse_normalized`].
    NonNormalized,
}

impl fmt::Display for HumanIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::HumanId => "human id",
            Self::Lower => "lowercase human id",
            Self::NonNormalized => "non-normalized human id",
        };

        f.write_str(s)
    }
}

/// The reason a value is not a valid Human ID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// The value is shorter than the minimum length.
    #[error("too short: got {len} bytes, min {min}")]
    TooShort { len: usize, min: usize },

    /// The value is longer than the maximum length.
    #[error("too long: got {len} bytes, max {max}")]
    TooLong { len: usize, max: usize },

    /// The value is not a valid hostname label.
    #[error("bad hostname label {label:?}: {source}")]
    Label { label: String, source: LabelError },

    /// The value contains a run of too many hyphens.
    #[error("at index {index}: max 2 consecutive hyphens are allowed")]
    HyphenRun { index: usize },

    /// The value contains an uppercase letter.
    #[error("at index {index}: {rune:?} is not lowercase")]
    NotLowercase { index: usize, rune: char },

    /// Normalization removed every rune of the value.
    #[error("cannot normalize")]
    CannotNormalize,
}

/// Error returned when a Human ID cannot be created.
///
/// Carries the original input for diagnostics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("bad {kind} {input:?}: {reason}")]
pub struct HumanIdError {
    kind: HumanIdKind,
    input: String,
    reason: InvalidReason,
}

impl HumanIdError {
    pub(crate) fn new(kind: HumanIdKind, input: impl Into<String>, reason: InvalidReason) -> Self {
        Self {
            kind,
            input: input.into(),
            reason,
        }
    }

    /// Returns the constructor that rejected the input.
    pub fn kind(&self) -> HumanIdKind {
        self.kind
    }

    /// Returns the rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the reason the input was rejected.
    pub fn reason(&self) -> &InvalidReason {
        &self.reason
    }

    /// Returns true if the input was too short.
    pub fn is_too_short(&self) -> bool {
        matches!(self.reason, InvalidReason::TooShort { .. })
    }

    /// Returns true if the input was too long.
    pub fn is_too_long(&self) -> bool {
        matches!(self.reason, InvalidReason::TooLong { .. })
    }

    /// Returns true if normalization could not salvage anything.
    pub fn is_cannot_normalize(&self) -> bool {
        matches!(self.reason, InvalidReason::CannotNormalize)
    }
}
