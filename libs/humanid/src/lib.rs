//! # dnsfence-humanid
//!
//! Human ID validation and normalization for dnsfence device profiles.
//!
//! ## Design Principles
//!
//! - A Human ID is a user-chosen device name that is also a legal hostname label
//! - Strict constructors only validate, they never rewrite input
//! - The normalizing parser rewrites arbitrary text into a valid Human ID on a
//!   best-effort basis and fails only when nothing usable remains
//! - Values are immutable and typed, so validated and raw strings cannot mix
//!
//! ## Format
//!
//! A Human ID is 1 to 63 bytes of ASCII letters, digits, and hyphens. It
//! neither starts nor ends with a hyphen and never contains more than two
//! hyphens in a row.
//!
//! Examples:
//! - `My-Phone`
//! - `living-room--tv`
//! - `Router2`
//!
//! ```
//! use dnsfence_humanid::{HumanId, HumanIdParser};
//!
//! let id = HumanId::new("My-Phone").unwrap();
//! assert_eq!(id.as_str(), "My-Phone");
//!
//! let parser = HumanIdParser::new();
//! let id = parser.parse_normalized("My Phone!!!").unwrap();
//! assert_eq!(id.as_str(), "My-Phone");
//! ```

mod error;
mod label;
#[macro_use]
mod macros;
mod parser;
mod types;

pub use error::{HumanIdError, HumanIdKind, InvalidReason, LabelError};
pub use label::{is_label_rune, validate_label};
pub use parser::HumanIdParser;
pub use types::*;
