//! Conversions between backend messages and validated types.

use dnsfence_humanid::{HumanId, HumanIdLower};
use prost::Message;

use crate::error::BackendError;
use crate::messages::{CreateDeviceRequest, CreateDeviceResponse, DeviceSettings, DeviceType};

impl CreateDeviceRequest {
    /// Creates a request for a device identified by `human_id`.
    #[must_use]
    pub fn by_human_id(dns_id: impl Into<String>, human_id: &HumanId, device_type: DeviceType) -> Self {
        Self {
            dns_id: dns_id.into(),
            human_id: human_id.as_str().to_string(),
            device_type: device_type.into(),
        }
    }

    /// Returns the validated device type.
    pub fn checked_device_type(&self) -> Result<DeviceType, BackendError> {
        match DeviceType::try_from(self.device_type) {
            Ok(DeviceType::Invalid) | Err(_) => Err(BackendError::BadDeviceType(self.device_type)),
            Ok(typ) => Ok(typ),
        }
    }

    /// Returns the validated Human ID.
    pub fn checked_human_id(&self) -> Result<HumanId, BackendError> {
        Ok(HumanId::new(self.human_id.as_str())?)
    }
}

impl CreateDeviceResponse {
    /// Decodes a response from its wire bytes.
    pub fn decode_bytes(buf: &[u8]) -> Result<Self, BackendError> {
        Ok(Self::decode(buf)?)
    }

    /// Returns the created device.
    pub fn into_device(self) -> Result<DeviceSettings, BackendError> {
        self.device.ok_or(BackendError::MissingField("device"))
    }
}

impl DeviceSettings {
    /// Returns the validated lowercase Human ID, if the device has one.
    ///
    /// An empty wire value means the device was not created by Human ID.
    pub fn checked_human_id_lower(&self) -> Result<Option<HumanIdLower>, BackendError> {
        if self.human_id_lower.is_empty() {
            return Ok(None);
        }

        Ok(Some(HumanIdLower::new(self.human_id_lower.as_str())?))
    }
}
