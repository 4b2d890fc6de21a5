//! # dnsfence-devicesetter
//!
//! Resolves the device a DNS query belongs to from the extended device ID a
//! client sends, and creates devices by Human ID when they are not known yet.
//!
//! An extended device ID is a single DNS label of the form
//! `{type}-{profile id}-{human id}`, for example `ios-abcd1234-my-phone`.
//!
//! Problems with the client-supplied data are reported as
//! [`DeviceDataError`], which is never sent to the error aggregation service
//! since it is caused by user input rather than by a defect.

mod error;
mod extid;
mod profiledb;
mod setter;

pub use error::{DeviceDataError, DeviceIdError, ReportableError, SetterError};
pub use extid::{device_type_code, device_type_from_code, ExtendedDeviceId, ProfileId};
pub use profiledb::{Device, InMemoryProfileDb, ProfileDb};
pub use setter::DeviceSetter;
