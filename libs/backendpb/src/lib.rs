//! # dnsfence-backendpb
//!
//! Protobuf messages exchanged with the dnsfence backend that carry Human
//! IDs, plus conversions between their wire fields and the validated types of
//! [`dnsfence_humanid`].
//!
//! Human IDs travel as plain protobuf `string` fields. Outgoing values are
//! already validated; incoming values are validated again before use.

mod convert;
mod error;
mod messages;

pub use error::BackendError;
pub use messages::*;
