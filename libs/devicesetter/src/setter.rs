//! Device resolution for DNS queries.

use std::collections::HashSet;
use std::net::IpAddr;

use dnsfence_humanid::HumanId;
use tracing::{debug, info};

use crate::error::SetterError;
use crate::extid::ExtendedDeviceId;
use crate::profiledb::{Device, ProfileDb};

/// Finds or creates the device a DNS query belongs to.
pub struct DeviceSetter<D> {
    db: D,

    /// Dedicated addresses that are assigned to a profile.
    dedicated: HashSet<IpAddr>,
}

impl<D: ProfileDb> DeviceSetter<D> {
    /// Create a new device setter over `db`.
    pub fn new(db: D) -> Self {
        Self {
            db,
            dedicated: HashSet::new(),
        }
    }

    /// Marks `addr` as a known dedicated address.
    #[must_use]
    pub fn with_dedicated(mut self, addr: IpAddr) -> Self {
        self.dedicated.insert(addr);
        self
    }

    /// Returns the underlying profile database.
    pub fn db(&self) -> &D {
        &self.db
    }

    /// Checks that a query to `local_addr` may be served.
    ///
    /// `is_dedicated` tells whether the address was reached through a
    /// dedicated listener.
    pub fn check_dedicated(&self, local_addr: IpAddr, is_dedicated: bool) -> Result<(), SetterError> {
        if is_dedicated && !self.dedicated.contains(&local_addr) {
            return Err(SetterError::UnknownDedicated);
        }

        Ok(())
    }

    /// Parses `label` and returns the matching device, creating it if needed.
    pub fn set_device(&self, label: &str) -> Result<Device, SetterError> {
        let ext_id = ExtendedDeviceId::parse(label)?;

        self.find_or_create(&ext_id)
    }

    /// Returns the device for `ext_id`, creating it if it does not exist.
    pub fn find_or_create(&self, ext_id: &ExtendedDeviceId) -> Result<Device, SetterError> {
        if let Some(device) = self
            .db
            .device_by_human_id(&ext_id.profile_id, &ext_id.human_id)?
        {
            debug!(
                profile_id = %ext_id.profile_id,
                device_id = %device.id,
                "found device by human id"
            );

            return Ok(device);
        }

        let device = self.db.create_device_by_human_id(
            &ext_id.profile_id,
            &HumanId::from(ext_id.human_id.clone()),
            ext_id.device_type,
        )?;

        info!(
            profile_id = %ext_id.profile_id,
            device_id = %device.id,
            human_id = %ext_id.human_id,
            "created device by human id"
        );

        Ok(device)
    }
}
