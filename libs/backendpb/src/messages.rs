//! Backend message definitions.
//!
//! These mirror the device messages of the backend DNS service schema.

/// The kind of a device as known to the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum DeviceType {
    Invalid = 0,
    Windows = 1,
    Android = 2,
    Mac = 3,
    Ios = 4,
    Linux = 5,
    Router = 6,
    SmartTv = 7,
    GameConsole = 8,
    Other = 9,
}

/// Asks the backend to create a device identified by its Human ID.
#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateDeviceRequest {
    /// The profile the device belongs to.
    #[prost(string, tag = "1")]
    pub dns_id: String,

    /// The Human ID of the new device.
    #[prost(string, tag = "2")]
    pub human_id: String,

    #[prost(enumeration = "DeviceType", tag = "3")]
    pub device_type: i32,
}

/// The backend's answer to [`CreateDeviceRequest`].
#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateDeviceResponse {
    #[prost(message, optional, tag = "1")]
    pub device: Option<DeviceSettings>,
}

/// Device settings as sent in profile sync and device creation responses.
#[derive(Clone, PartialEq, prost::Message)]
pub struct DeviceSettings {
    #[prost(string, tag = "1")]
    pub id: String,

    /// The display name of the device.
    #[prost(string, tag = "2")]
    pub name: String,

    #[prost(bool, tag = "3")]
    pub filtering_enabled: bool,

    /// The lowercase Human ID of the device, empty if it has none.
    #[prost(string, tag = "4")]
    pub human_id_lower: String,
}
