//! Property tests for Human ID validation and normalization.
//!
//! Verifies that:
//! 1. Valid labels are accepted unchanged by the strict constructors
//! 2. An uppercase letter is reported at its byte index
//! 3. Every normalized value is a valid Human ID
//! 4. Normalization is idempotent

use dnsfence_humanid::{
    HumanId, HumanIdLower, HumanIdParser, InvalidReason, MAX_HUMAN_ID_LEN,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Generate valid Human IDs: alphanumeric words joined by one or two hyphens.
fn valid_human_id_strategy(word: &'static str) -> impl Strategy<Value = String> {
    (
        prop::string::string_regex(word).unwrap(),
        prop::collection::vec(
            (
                prop::string::string_regex("-{1,2}").unwrap(),
                prop::string::string_regex(word).unwrap(),
            ),
            0..6,
        ),
    )
        .prop_map(|(first, rest)| {
            let mut s = first;
            for (sep, w) in rest {
                s.push_str(&sep);
                s.push_str(&w);
            }
            s
        })
        .prop_filter("too long", |s| s.len() <= MAX_HUMAN_ID_LEN)
}

/// Generate arbitrary user input, biased towards hyphens and foreign runes.
fn user_input_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::string::string_regex("[a-zA-Z0-9 !._абв📱-]{0,80}").unwrap(),
        1 => any::<String>(),
        1 => prop::string::string_regex("[a-z-]{50,200}").unwrap(),
    ]
}

// ============================================================================
// STRICT CONSTRUCTOR PROPERTIES
// ============================================================================

proptest! {
    /// Property: valid input is accepted and kept byte-for-byte.
    #[test]
    fn prop_valid_human_id_unchanged(s in valid_human_id_strategy("[a-zA-Z0-9]{1,10}")) {
        let id = HumanId::new(s.as_str()).unwrap();
        prop_assert_eq!(id.as_str(), s.as_str());
    }

    /// Property: lowercase input passes the lowercase constructor unchanged.
    #[test]
    fn prop_valid_lower_unchanged(s in valid_human_id_strategy("[a-z0-9]{1,10}")) {
        let id = HumanIdLower::new(s.as_str()).unwrap();
        prop_assert_eq!(id.as_str(), s.as_str());
    }

    /// Property: an uppercase letter fails the lowercase constructor at its index.
    #[test]
    fn prop_uppercase_reported_at_index(
        s in valid_human_id_strategy("[a-z]{1,10}"),
        pos in any::<prop::sample::Index>(),
    ) {
        let letters: Vec<usize> = s
            .char_indices()
            .filter(|(_, c)| c.is_ascii_lowercase())
            .map(|(i, _)| i)
            .collect();
        let index = letters[pos.index(letters.len())];

        let mut upper = s.clone();
        upper[index..=index].make_ascii_uppercase();
        let rune = upper.as_bytes()[index] as char;

        let err = HumanIdLower::new(upper.as_str()).unwrap_err();
        prop_assert_eq!(err.reason(), &InvalidReason::NotLowercase { index, rune });

        // Still a valid case-sensitive Human ID.
        prop_assert!(HumanId::new(upper).is_ok());
    }
}

// ============================================================================
// NORMALIZATION PROPERTIES
// ============================================================================

proptest! {
    /// Property: normalized output is always a valid Human ID.
    #[test]
    fn prop_normalized_is_valid(s in user_input_strategy()) {
        let p = HumanIdParser::new();
        if let Ok(id) = p.parse_normalized(s.as_str()) {
            prop_assert!(!id.is_empty());
            prop_assert!(id.len() <= MAX_HUMAN_ID_LEN);
            prop_assert!(HumanId::new(id.as_str()).is_ok(), "invalid output {:?}", id);
        }
    }

    /// Property: normalizing twice equals normalizing once.
    #[test]
    fn prop_normalize_idempotent(s in user_input_strategy()) {
        let p = HumanIdParser::new();
        if let Ok(once) = p.parse_normalized(s.as_str()) {
            let twice = p.parse_normalized(once.as_str()).unwrap();
            prop_assert_eq!(once, twice);
        }
    }

    /// Property: normalization fails only on empty or unsalvageable input.
    #[test]
    fn prop_normalize_fails_only_without_label_runes(s in user_input_strategy()) {
        let p = HumanIdParser::new();
        let has_alnum = s.chars().any(|c| c.is_ascii_alphanumeric());
        match p.parse_normalized(s.as_str()) {
            Ok(_) => prop_assert!(has_alnum),
            Err(err) if s.is_empty() => prop_assert!(err.is_too_short()),
            Err(err) => {
                prop_assert!(err.is_cannot_normalize());
                prop_assert!(!has_alnum);
            }
        }
    }

    /// Property: valid input takes the fast path and is returned unchanged.
    #[test]
    fn prop_normalize_keeps_valid(s in valid_human_id_strategy("[a-zA-Z0-9]{1,10}")) {
        let p = HumanIdParser::new();
        let id = p.parse_normalized(s.as_str()).unwrap();
        prop_assert_eq!(id.as_str(), s.as_str());
    }
}
