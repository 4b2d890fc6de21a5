//! Device ID command.
//!
//! Resolves extended device IDs against an in-memory profile database, so
//! repeated IDs map to the same device the way they would in production.

use anyhow::Result;
use clap::Args;
use dnsfence_devicesetter::{
    device_type_code, DeviceSetter, ExtendedDeviceId, InMemoryProfileDb, ReportableError,
};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::{display_option, print_output};

use super::CommandContext;

/// Parse extended device IDs (`{type}-{profile id}-{human id}`).
#[derive(Debug, Args)]
pub struct DeviceIdCommand {
    /// Device ID labels. Read from stdin, one per line, if omitted.
    labels: Vec<String>,
}

/// One resolved device ID.
#[derive(Debug, Default, Serialize, Tabled)]
struct DeviceIdRow {
    #[tabled(rename = "Label")]
    label: String,

    #[tabled(rename = "Type", display = "display_option")]
    device_type: Option<String>,

    #[tabled(rename = "Profile ID", display = "display_option")]
    profile_id: Option<String>,

    #[tabled(rename = "Human ID", display = "display_option")]
    human_id: Option<String>,

    #[tabled(rename = "Device ID", display = "display_option")]
    device_id: Option<String>,

    #[tabled(rename = "Error", display = "display_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl DeviceIdCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let labels = ctx.inputs(self.labels)?;
        let setter = DeviceSetter::new(InMemoryProfileDb::new());

        let rows: Vec<DeviceIdRow> = labels
            .into_iter()
            .map(|label| resolve_row(&setter, label))
            .collect();

        print_output(&rows, ctx.format);

        let failed = rows.iter().filter(|r| r.error.is_some()).count();
        if failed > 0 {
            return Err(CliError::InvalidDeviceIds {
                failed,
                total: rows.len(),
            }
            .into());
        }

        Ok(())
    }
}

fn resolve_row(setter: &DeviceSetter<InMemoryProfileDb>, label: String) -> DeviceIdRow {
    let ext_id = match ExtendedDeviceId::parse(&label) {
        Ok(ext_id) => ext_id,
        Err(err) => {
            debug!(error = %err, reportable = err.is_reportable(), "bad device id");

            return DeviceIdRow {
                label,
                error: Some(err.to_string()),
                ..Default::default()
            };
        }
    };

    let mut row = DeviceIdRow {
        device_type: device_type_code(ext_id.device_type).map(str::to_string),
        profile_id: Some(ext_id.profile_id.to_string()),
        human_id: Some(ext_id.human_id.to_string()),
        label,
        ..Default::default()
    };

    match setter.find_or_create(&ext_id) {
        Ok(device) => row.device_id = Some(device.id),
        Err(err) => row.error = Some(err.to_string()),
    }

    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_row() {
        let setter = DeviceSetter::new(InMemoryProfileDb::new());
        let row = resolve_row(&setter, "ios-abcd1234-my-phone".to_string());

        assert_eq!(row.device_type.as_deref(), Some("ios"));
        assert_eq!(row.profile_id.as_deref(), Some("abcd1234"));
        assert_eq!(row.human_id.as_deref(), Some("my-phone"));
        assert!(row.device_id.is_some());
        assert!(row.error.is_none());
    }

    #[test]
    fn test_resolve_row_same_device() {
        let setter = DeviceSetter::new(InMemoryProfileDb::new());
        let a = resolve_row(&setter, "ios-abcd1234-my-phone".to_string());
        let b = resolve_row(&setter, "ios-abcd1234-my-phone".to_string());
        assert_eq!(a.device_id, b.device_id);
    }

    #[test]
    fn test_resolve_row_bad() {
        let setter = DeviceSetter::new(InMemoryProfileDb::new());
        let row = resolve_row(&setter, "xyz-abcd1234-my-phone".to_string());

        assert!(row.device_id.is_none());
        assert_eq!(
            row.error.as_deref(),
            Some("device type device id check: unknown device type code \"xyz\"")
        );
    }
}
