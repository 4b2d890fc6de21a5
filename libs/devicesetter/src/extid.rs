//! Extended device IDs sent by clients in DNS labels.

use std::fmt;

use dnsfence_backendpb::DeviceType;
use dnsfence_humanid::HumanIdLower;
use serde::{Deserialize, Serialize};

use crate::error::{DeviceDataError, DeviceIdError};

/// The maximum length of a profile ID in bytes.
pub const MAX_PROFILE_ID_LEN: usize = 8;

/// Short device type codes used in extended device IDs.
const DEVICE_TYPE_CODES: [(&str, DeviceType); 9] = [
    ("win", DeviceType::Windows),
    ("and", DeviceType::Android),
    ("mac", DeviceType::Mac),
    ("ios", DeviceType::Ios),
    ("lnx", DeviceType::Linux),
    ("rtr", DeviceType::Router),
    ("stv", DeviceType::SmartTv),
    ("gam", DeviceType::GameConsole),
    ("otr", DeviceType::Other),
];

/// Returns the device type for a short code such as `ios`.
pub fn device_type_from_code(code: &str) -> Option<DeviceType> {
    DEVICE_TYPE_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|&(_, typ)| typ)
}

/// Returns the short code of a device type, if it has one.
pub fn device_type_code(typ: DeviceType) -> Option<&'static str> {
    DEVICE_TYPE_CODES
        .iter()
        .find(|(_, t)| *t == typ)
        .map(|&(code, _)| code)
}

/// The ID of a DNS profile: 1 to 8 ASCII letters and digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProfileId(String);

impl ProfileId {
    /// Validates and wraps a profile ID.
    pub fn new(s: impl Into<String>) -> Result<Self, DeviceIdError> {
        let s = s.into();
        let reason = if s.is_empty() {
            Some("empty")
        } else if s.len() > MAX_PROFILE_ID_LEN {
            Some("too long")
        } else if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            Some("bad rune")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DeviceIdError::BadProfileId { id: s, reason }),
            None => Ok(Self(s)),
        }
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProfileId {
    type Error = DeviceIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ProfileId> for String {
    fn from(id: ProfileId) -> Self {
        id.0
    }
}

/// A device ID that carries everything needed to create the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedDeviceId {
    pub device_type: DeviceType,
    pub profile_id: ProfileId,
    pub human_id: HumanIdLower,
}

impl ExtendedDeviceId {
    /// Parses an extended device ID from one DNS label.
    ///
    /// DNS names are case-insensitive, so the Human ID part must already be
    /// lowercase.
    pub fn parse(label: &str) -> Result<Self, DeviceDataError> {
        let mut parts = label.splitn(3, '-');
        let (Some(code), Some(profile), Some(human)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(DeviceDataError::new(
                DeviceIdError::BadFormat(label.to_string()),
                "extended device id",
            ));
        };

        let device_type = device_type_from_code(code).ok_or_else(|| {
            DeviceDataError::new(DeviceIdError::UnknownType(code.to_string()), "device type")
        })?;

        let profile_id =
            ProfileId::new(profile).map_err(|err| DeviceDataError::new(err, "profile id"))?;

        let human_id =
            HumanIdLower::new(human).map_err(|err| DeviceDataError::new(err, "human id"))?;

        Ok(Self {
            device_type,
            profile_id,
            human_id,
        })
    }
}

impl fmt::Display for ExtendedDeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = device_type_code(self.device_type).unwrap_or("otr");
        write!(f, "{code}-{}-{}", self.profile_id, self.human_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn test_parse_extended_device_id() {
        let id = ExtendedDeviceId::parse("ios-abcd1234-my-phone").unwrap();
        assert_eq!(id.device_type, DeviceType::Ios);
        assert_eq!(id.profile_id.as_str(), "abcd1234");
        assert_eq!(id.human_id.as_str(), "my-phone");
        assert_eq!(id.to_string(), "ios-abcd1234-my-phone");
    }

    #[test]
    fn test_parse_keeps_double_hyphen() {
        let id = ExtendedDeviceId::parse("stv-p1-living-room--tv").unwrap();
        assert_eq!(id.human_id.as_str(), "living-room--tv");
    }

    #[rstest]
    #[case::no_separators("iosabcd", "extended device id")]
    #[case::one_separator("ios-abcd", "extended device id")]
    #[case::unknown_type("xyz-abcd-phone", "device type")]
    #[case::empty_profile("ios--phone", "profile id")]
    #[case::long_profile("ios-abcdefghi-phone", "profile id")]
    #[case::bad_profile("ios-ab_c-phone", "profile id")]
    #[case::uppercase("ios-abcd-My-Phone", "human id")]
    #[case::empty_human("ios-abcd-", "human id")]
    #[case::hyphen_run("ios-abcd-my---phone", "human id")]
    fn test_parse_extended_device_id_bad(#[case] label: &str, #[case] typ: &str) {
        let err = ExtendedDeviceId::parse(label).unwrap_err();
        assert_eq!(err.typ(), typ, "label: {label:?}");
    }

    #[test]
    fn test_parse_bad_human_id_message() {
        let err = ExtendedDeviceId::parse("ios-abcd-My-Phone").unwrap_err();
        assert_eq!(
            err.to_string(),
            "human id device id check: bad lowercase human id \"My-Phone\": \
             at index 0: 'M' is not lowercase"
        );
    }

    #[test]
    fn test_device_type_codes() {
        for (code, typ) in DEVICE_TYPE_CODES {
            assert_eq!(device_type_from_code(code), Some(typ));
            assert_eq!(device_type_code(typ), Some(code));
        }
        assert_eq!(device_type_from_code("IOS"), None);
        assert_eq!(device_type_code(DeviceType::Invalid), None);
    }

    #[test]
    fn test_profile_id_json() {
        let id: ProfileId = serde_json::from_str("\"abcd1234\"").unwrap();
        assert_eq!(id.as_str(), "abcd1234");
        assert!(serde_json::from_str::<ProfileId>("\"abcd-1234\"").is_err());
    }
}
