//! Profile database interface and in-memory implementation.
//!
//! The profile database is the device setter's view of the backend:
//! - Looking devices up by lowercase Human ID
//! - Creating devices by Human ID
//!
//! The in-memory implementation is used in tests and for dry runs.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use dnsfence_backendpb::{BackendError, CreateDeviceRequest, DeviceSettings, DeviceType};
use dnsfence_humanid::{HumanId, HumanIdLower};
use parking_lot::RwLock;
use serde::Serialize;
use tracing::debug;

use crate::error::SetterError;
use crate::extid::ProfileId;

/// A device known to the profile database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    /// Backend device ID.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Lowercase Human ID, if the device was created by one.
    pub human_id_lower: Option<HumanIdLower>,

    pub filtering_enabled: bool,
}

impl Device {
    /// Converts backend device settings, validating the Human ID.
    pub fn from_settings(settings: DeviceSettings) -> Result<Self, SetterError> {
        let human_id_lower = settings.checked_human_id_lower()?;

        Ok(Self {
            id: settings.id,
            name: settings.name,
            human_id_lower,
            filtering_enabled: settings.filtering_enabled,
        })
    }
}

/// Profile database interface.
pub trait ProfileDb: Send + Sync {
    /// Returns the device of `profile_id` with the given Human ID, if any.
    fn device_by_human_id(
        &self,
        profile_id: &ProfileId,
        human_id: &HumanIdLower,
    ) -> Result<Option<Device>, SetterError>;

    /// Creates a device of `profile_id` identified by `human_id`.
    fn create_device_by_human_id(
        &self,
        profile_id: &ProfileId,
        human_id: &HumanId,
        device_type: DeviceType,
    ) -> Result<Device, SetterError>;
}

/// In-memory profile database.
pub struct InMemoryProfileDb {
    /// Devices keyed by profile and lowercase Human ID.
    devices: RwLock<HashMap<(ProfileId, HumanIdLower), Device>>,

    /// Counter for generating device IDs.
    device_counter: AtomicU64,
}

impl InMemoryProfileDb {
    /// Create a new, empty database.
    pub fn new() -> Self {
        Self {
            devices: RwLock::new(HashMap::new()),
            device_counter: AtomicU64::new(0),
        }
    }

    /// Returns the number of stored devices.
    pub fn len(&self) -> usize {
        self.devices.read().len()
    }

    /// Returns true if no devices are stored.
    pub fn is_empty(&self) -> bool {
        self.devices.read().is_empty()
    }

    /// Generate a new device ID.
    fn next_device_id(&self) -> String {
        let counter = self.device_counter.fetch_add(1, Ordering::SeqCst);
        format!("dev{:08x}", counter)
    }
}

impl Default for InMemoryProfileDb {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileDb for InMemoryProfileDb {
    fn device_by_human_id(
        &self,
        profile_id: &ProfileId,
        human_id: &HumanIdLower,
    ) -> Result<Option<Device>, SetterError> {
        let key = (profile_id.clone(), human_id.clone());

        Ok(self.devices.read().get(&key).cloned())
    }

    fn create_device_by_human_id(
        &self,
        profile_id: &ProfileId,
        human_id: &HumanId,
        device_type: DeviceType,
    ) -> Result<Device, SetterError> {
        // Build the request the way the backend would receive it.
        let req = CreateDeviceRequest::by_human_id(profile_id.as_str(), human_id, device_type);
        let human_id = req.checked_human_id()?;
        let lower = HumanIdLower::new(human_id.as_str().to_ascii_lowercase())
            .map_err(BackendError::from)?;

        let mut devices = self.devices.write();
        let key = (profile_id.clone(), lower.clone());
        if let Some(existing) = devices.get(&key) {
            return Ok(existing.clone());
        }

        let settings = DeviceSettings {
            id: self.next_device_id(),
            name: human_id.to_string(),
            filtering_enabled: true,
            human_id_lower: lower.to_string(),
        };
        let device = Device::from_settings(settings)?;

        debug!(
            profile_id = %profile_id,
            device_id = %device.id,
            device_type = ?req.device_type(),
            "[MEMORY] device created"
        );

        devices.insert(key, device.clone());

        Ok(device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ProfileId {
        ProfileId::new("prof1").unwrap()
    }

    #[test]
    fn test_create_then_find() {
        let db = InMemoryProfileDb::new();
        let human_id = HumanId::new("My-Phone").unwrap();

        let created = db
            .create_device_by_human_id(&profile(), &human_id, DeviceType::Ios)
            .unwrap();
        assert_eq!(created.name, "My-Phone");
        assert_eq!(created.human_id_lower.as_ref().unwrap().as_str(), "my-phone");

        let lower = HumanIdLower::new("my-phone").unwrap();
        let found = db.device_by_human_id(&profile(), &lower).unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn test_create_is_idempotent_per_lower_id() {
        let db = InMemoryProfileDb::new();
        let a = db
            .create_device_by_human_id(&profile(), &HumanId::new("My-Phone").unwrap(), DeviceType::Ios)
            .unwrap();
        let b = db
            .create_device_by_human_id(&profile(), &HumanId::new("my-phone").unwrap(), DeviceType::Ios)
            .unwrap();
        assert_eq!(a.id, b.id);
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn test_devices_scoped_by_profile() {
        let db = InMemoryProfileDb::new();
        let human_id = HumanId::new("phone").unwrap();
        db.create_device_by_human_id(&profile(), &human_id, DeviceType::Android)
            .unwrap();

        let other = ProfileId::new("prof2").unwrap();
        let lower = HumanIdLower::new("phone").unwrap();
        assert!(db.device_by_human_id(&other, &lower).unwrap().is_none());
    }

    #[test]
    fn test_device_from_settings_bad_human_id() {
        let settings = DeviceSettings {
            id: "dev1".to_string(),
            name: "x".to_string(),
            filtering_enabled: false,
            human_id_lower: "Bad".to_string(),
        };
        let err = Device::from_settings(settings).unwrap_err();
        assert!(matches!(
            err,
            SetterError::ProfileDb(BackendError::HumanId(ref e)) if e.input() == "Bad"
        ));
    }
}
