//! Validated Human ID types.
//!
//! Both types wrap the input unchanged. The lowercase variant adds a case
//! check on top of the full Human ID rules and converts into [`HumanId`] for
//! free.

use crate::error::{HumanIdKind, InvalidReason};
use crate::label::validate_label;

/// The maximum length of a Human ID in bytes.
pub const MAX_HUMAN_ID_LEN: usize = 63;

/// The minimum length of a Human ID in bytes.
pub const MIN_HUMAN_ID_LEN: usize = 1;

/// The maximum number of hyphens allowed in a row.
pub const MAX_CONSECUTIVE_HYPHENS: usize = 2;

// =============================================================================
// Validation
// =============================================================================

/// Checks every Human ID rule in order and returns the first violation.
pub(crate) fn validate_human_id(s: &str) -> Result<(), InvalidReason> {
    let len = s.len();
    if len < MIN_HUMAN_ID_LEN {
        return Err(InvalidReason::TooShort {
            len,
            min: MIN_HUMAN_ID_LEN,
        });
    }

    if len > MAX_HUMAN_ID_LEN {
        return Err(InvalidReason::TooLong {
            len,
            max: MAX_HUMAN_ID_LEN,
        });
    }

    validate_label(s).map_err(|source| InvalidReason::Label {
        label: s.to_string(),
        source,
    })?;

    match find_hyphen_run(s.as_bytes(), MAX_CONSECUTIVE_HYPHENS + 1) {
        Some(index) => Err(InvalidReason::HyphenRun { index }),
        None => Ok(()),
    }
}

/// Checks the Human ID rules and then that no letter is uppercase.
pub(crate) fn validate_human_id_lower(s: &str) -> Result<(), InvalidReason> {
    validate_human_id(s)?;

    match s.char_indices().find(|(_, c)| c.is_ascii_uppercase()) {
        Some((index, rune)) => Err(InvalidReason::NotLowercase { index, rune }),
        None => Ok(()),
    }
}

/// Returns the byte index of the first run of at least `min_run` hyphens.
fn find_hyphen_run(b: &[u8], min_run: usize) -> Option<usize> {
    let mut run = 0;
    for (i, &c) in b.iter().enumerate() {
        if c != b'-' {
            run = 0;
            continue;
        }

        run += 1;
        if run == min_run {
            return Some(i + 1 - min_run);
        }
    }

    None
}

// =============================================================================
// Types
// =============================================================================

define_human_id!(
    /// A user-chosen device name that is also a valid hostname label.
    ///
    /// 1 to 63 bytes of ASCII letters, digits and hyphens, not starting or
    /// ending with a hyphen and without runs of more than two hyphens.
    HumanId,
    HumanIdKind::HumanId,
    validate_human_id
);

define_human_id!(
    /// A [`HumanId`] without uppercase letters.
    ///
    /// Used where the value comes from a case-insensitive source, such as a
    /// DNS name.
    HumanIdLower,
    HumanIdKind::Lower,
    validate_human_id_lower
);

impl HumanId {
    /// Wraps a string the normalizer has already made valid.
    pub(crate) fn from_normalized(s: String) -> Self {
        debug_assert_eq!(validate_human_id(&s), Ok(()), "normalizer produced {s:?}");

        Self(s)
    }
}

impl From<HumanIdLower> for HumanId {
    fn from(id: HumanIdLower) -> Self {
        Self(id.0)
    }
}

impl PartialEq<HumanIdLower> for HumanId {
    fn eq(&self, other: &HumanIdLower) -> bool {
        self.0 == other.0
    }
}

// =============================================================================
// Tests
// =============================================================================
