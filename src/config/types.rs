// Types for the configuration settings

use serde::Deserialize;
use std::fmt;

use crate::types::{AppCapability, AppInfo};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 55555;

/// Address of the remote `App` service, also used as the listen address by `serve`
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ConnectionTarget {
    pub host: String,
    pub port: u16,
}

impl Default for ConnectionTarget {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ConnectionTarget {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Host without the brackets an IPv6 literal may be written with
    pub fn bare_host(&self) -> &str {
        self.host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(&self.host)
    }

    /// Plaintext endpoint URI for the tonic channel
    pub fn uri(&self) -> String {
        format!("http://{}", self)
    }
}

impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let host = self.bare_host();
        if host.contains(':') {
            write!(f, "[{}]:{}", host, self.port)
        } else {
            write!(f, "{}:{}", host, self.port)
        }
    }
}

/// Application info the reference server reports
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub major_version: i32,
    pub minor_version: i32,
    pub patch_version: i32,
    pub app_type: u32,
    pub description: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "Caffa".to_string(),
            major_version: 2,
            minor_version: 0,
            patch_version: 0,
            app_type: AppCapability::Server.bit(),
            description: "Caffa reference application server".to_string(),
        }
    }
}

impl From<&AppSettings> for AppInfo {
    fn from(settings: &AppSettings) -> Self {
        Self {
            name: settings.name.clone(),
            major_version: settings.major_version,
            minor_version: settings.minor_version,
            patch_version: settings.patch_version,
            app_type: settings.app_type,
        }
    }
}
