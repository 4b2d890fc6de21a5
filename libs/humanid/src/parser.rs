//! Best-effort normalization of arbitrary text into a [`HumanId`].

use tracing::debug;

use crate::error::{HumanIdError, HumanIdKind, InvalidReason};
use crate::label::is_label_rune;
use crate::types::{
    validate_human_id, HumanId, MAX_CONSECUTIVE_HYPHENS, MAX_HUMAN_ID_LEN, MIN_HUMAN_ID_LEN,
};

/// Normalizes user input into valid Human IDs.
///
/// The parser holds no state between calls and can be shared freely across
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanIdParser {
    _priv: (),
}

impl HumanIdParser {
    /// Creates a new parser.
    #[must_use]
    pub const fn new() -> Self {
        Self { _priv: () }
    }

    /// Rewrites `s` into a valid [`HumanId`].
    ///
    /// Input that is already valid is returned unchanged, and an owned
    /// `String` is reused without allocating. Otherwise every rune that is not
    /// an ASCII letter, digit, or hyphen becomes a hyphen, runs of three or
    /// more hyphens collapse into one, edge hyphens are trimmed, and the
    /// result is cut to [`MAX_HUMAN_ID_LEN`] bytes.
    ///
    /// `s` is converted into a `String` only when it is returned as is or
    /// kept in the error, never before it is checked.
    ///
    /// Fails only if `s` is empty or nothing of it survives normalization.
    pub fn parse_normalized<S>(&self, s: S) -> Result<HumanId, HumanIdError>
    where
        S: AsRef<str> + Into<String>,
    {
        let input = s.as_ref();
        if validate_human_id(input).is_ok() {
            return Ok(HumanId::from_normalized(s.into()));
        }

        let len = input.len();
        if len < MIN_HUMAN_ID_LEN {
            return Err(HumanIdError::new(
                HumanIdKind::NonNormalized,
                s,
                InvalidReason::TooShort {
                    len,
                    min: MIN_HUMAN_ID_LEN,
                },
            ));
        }

        let normalized = normalize(input);
        if normalized.is_empty() {
            debug!(input = %input, "human id cannot be normalized");

            return Err(HumanIdError::new(
                HumanIdKind::NonNormalized,
                s,
                InvalidReason::CannotNormalize,
            ));
        }

        debug!(input = %input, normalized = %normalized, "normalized human id");

        Ok(HumanId::from_normalized(normalized))
    }
}

/// Runs the rewrite, collapse, trim and truncate passes over `s`.
///
/// The result is either empty or a valid Human ID.
fn normalize(s: &str) -> String {
    let rewritten = replace_bad_runes(s);
    let collapsed = collapse_hyphen_runs(&rewritten);

    // The buffer is ASCII-only after the rewrite, so any byte index is a char
    // boundary.
    let trimmed = collapsed.trim_matches('-');
    let end = trimmed.len().min(MAX_HUMAN_ID_LEN);

    trimmed[..end].trim_end_matches('-').to_string()
}

/// Replaces every rune that cannot appear in a label with a single hyphen.
fn replace_bad_runes(s: &str) -> String {
    s.chars()
        .map(|c| if is_label_rune(c) { c } else { '-' })
        .collect()
}

/// Collapses runs of more than [`MAX_CONSECUTIVE_HYPHENS`] hyphens into one.
///
/// Shorter runs are kept as they are.
fn collapse_hyphen_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut run = 0;
    for c in s.chars() {
        if c == '-' {
            run += 1;
            continue;
        }

        push_run(&mut out, run);
        run = 0;
        out.push(c);
    }
    push_run(&mut out, run);

    out
}

fn push_run(out: &mut String, run: usize) {
    let n = if run > MAX_CONSECUTIVE_HYPHENS { 1 } else { run };
    out.extend(std::iter::repeat('-').take(n));
}
