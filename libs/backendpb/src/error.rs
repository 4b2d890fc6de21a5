//! Error types for backend message conversion.

use dnsfence_humanid::HumanIdError;
use thiserror::Error;

/// Errors that can occur when converting backend messages.
#[derive(Debug, Error)]
pub enum BackendError {
    /// A required message field is absent.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A Human ID field does not hold a valid value.
    #[error("human id field: {0}")]
    HumanId(#[from] HumanIdError),

    /// The device type value is not a known enumeration value.
    #[error("bad device type: {0}")]
    BadDeviceType(i32),

    /// The message bytes cannot be decoded.
    #[error("decoding message: {0}")]
    Decode(#[from] prost::DecodeError),
}
