//! Error types for device resolution.

use dnsfence_backendpb::BackendError;
use dnsfence_humanid::HumanIdError;
use thiserror::Error;

/// An error that knows whether it should go to the error aggregation service.
pub trait ReportableError: std::error::Error {
    /// Returns true if the error indicates a defect worth reporting.
    fn is_reportable(&self) -> bool;
}

/// A problem with one part of a client-supplied device ID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceIdError {
    /// The label does not have the `{type}-{profile id}-{human id}` shape.
    #[error("bad format {0:?}: want {{type}}-{{profile id}}-{{human id}}")]
    BadFormat(String),

    /// The device type code is not known.
    #[error("unknown device type code {0:?}")]
    UnknownType(String),

    /// The profile ID is malformed.
    #[error("bad profile id {id:?}: {reason}")]
    BadProfileId { id: String, reason: &'static str },

    /// The Human ID part is invalid.
    #[error(transparent)]
    HumanId(#[from] HumanIdError),
}

/// Bad device data found while checking a device ID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{typ} device id check: {source}")]
pub struct DeviceDataError {
    typ: &'static str,
    source: DeviceIdError,
}

impl DeviceDataError {
    /// Wraps `source` as a problem with the `typ` part of a device ID.
    pub fn new(source: impl Into<DeviceIdError>, typ: &'static str) -> Self {
        Self {
            typ,
            source: source.into(),
        }
    }

    /// Returns which part of the device ID was bad.
    pub fn typ(&self) -> &'static str {
        self.typ
    }

    /// Returns the underlying problem.
    pub fn inner(&self) -> &DeviceIdError {
        &self.source
    }
}

impl ReportableError for DeviceDataError {
    fn is_reportable(&self) -> bool {
        false
    }
}

/// Errors returned by [`crate::DeviceSetter`].
#[derive(Debug, Error)]
pub enum SetterError {
    /// The request is for an unknown dedicated IP address and should be
    /// dropped.
    #[error("unknown dedicated ip")]
    UnknownDedicated,

    /// The client sent bad device data.
    #[error(transparent)]
    DeviceData(#[from] DeviceDataError),

    /// The profile database failed.
    #[error("profile db: {0}")]
    ProfileDb(#[from] BackendError),
}

impl ReportableError for SetterError {
    fn is_reportable(&self) -> bool {
        match self {
            Self::UnknownDedicated => false,
            Self::DeviceData(err) => err.is_reportable(),
            Self::ProfileDb(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::error::Error as _;

    use dnsfence_humanid::HumanIdLower;

    #[test]
    fn test_device_data_error_message() {
        let human_err = HumanIdLower::new("My-Phone").unwrap_err();
        let err = DeviceDataError::new(human_err.clone(), "human id");

        assert_eq!(
            err.to_string(),
            "human id device id check: bad lowercase human id \"My-Phone\": \
             at index 0: 'M' is not lowercase"
        );
        assert_eq!(err.typ(), "human id");
        assert_eq!(err.inner(), &DeviceIdError::HumanId(human_err));
    }

    #[test]
    fn test_device_data_error_unwraps() {
        let err = DeviceDataError::new(DeviceIdError::UnknownType("xyz".into()), "device type");
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "unknown device type code \"xyz\"");
    }

    #[test]
    fn test_device_data_error_not_reportable() {
        let err = DeviceDataError::new(DeviceIdError::BadFormat("x".into()), "extended device id");
        assert!(!err.is_reportable());

        let err = SetterError::from(err);
        assert!(!err.is_reportable());
    }

    #[test]
    fn test_setter_error_reportable() {
        assert!(!SetterError::UnknownDedicated.is_reportable());
        assert!(SetterError::ProfileDb(BackendError::MissingField("device")).is_reportable());
        assert_eq!(SetterError::UnknownDedicated.to_string(), "unknown dedicated ip");
    }

    #[test]
    fn test_setter_error_keeps_backend_source() {
        let human_err = HumanIdLower::new("Bad").unwrap_err();
        let err = SetterError::from(BackendError::from(human_err.clone()));

        let source = err.source().unwrap();
        let backend = source.downcast_ref::<BackendError>().unwrap();
        assert!(matches!(backend, BackendError::HumanId(e) if *e == human_err));
        assert_eq!(
            err.to_string(),
            "profile db: human id field: bad lowercase human id \"Bad\": \
             at index 0: 'B' is not lowercase"
        );
    }
}
