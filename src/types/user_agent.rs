use super::{ClientType, DeviceType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Client, device and operating system attributes extracted from a
/// `User-Agent` request header.
///
/// `client_type`, `client_name`, `device_type` and `os_name` are always
/// populated after classification ("Other" when inconclusive). The versions and
/// `url` are empty when the header does not carry them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserAgent {
    /// The header with every quote character removed.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub header: String,
    /// Cleaned header segments used for matching.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
    pub client_type: ClientType,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_name: String,
    /// Major.minor client version, if provided.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_version: String,
    pub device_type: DeviceType,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub os_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub os_version: String,
    /// Contact URL advertised by a bot or crawler.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl UserAgent {
    /// Classify `header` with the built-in rule table.
    pub fn parse(header: &str) -> Self {
        crate::parse(header)
    }

    pub fn is_bot(&self) -> bool {
        self.client_type == ClientType::Bot
    }
}

/// Abbreviated rendering: client type, client name, client version, device
/// type, OS name, OS version and URL, space-separated, skipping empty values.
impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.client_type.as_str())?;
        let rest = [
            self.client_name.as_str(),
            self.client_version.as_str(),
            self.device_type.as_str(),
            self.os_name.as_str(),
            self.os_version.as_str(),
            self.url.as_str(),
        ];
        for part in rest.iter().filter(|p| !p.is_empty()) {
            write!(f, " {}", part)?;
        }
        Ok(())
    }
}
