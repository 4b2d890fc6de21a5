//! Hostname label syntax (RFC 952 and RFC 1123).

use crate::error::LabelError;

/// Returns true if `c` may appear in a hostname label.
#[inline]
pub fn is_label_rune(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Validates a single hostname label.
///
/// Every rune must be an ASCII letter, digit, or hyphen, and the label must
/// not start or end with a hyphen. A leading or trailing hyphen is reported
/// as a bad rune like any other.
///
/// The length is not checked here, so an empty label passes.
pub fn validate_label(label: &str) -> Result<(), LabelError> {
    if label.starts_with('-') {
        return Err(LabelError {
            rune: '-',
            index: 0,
        });
    }

    if label.ends_with('-') {
        return Err(LabelError {
            rune: '-',
            index: label.len() - 1,
        });
    }

    match label.char_indices().find(|&(_, c)| !is_label_rune(c)) {
        Some((index, rune)) => Err(LabelError { rune, index }),
        None => Ok(()),
    }
}
