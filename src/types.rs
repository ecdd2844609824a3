use std::fmt;

use crate::format::format_app_name;
use crate::rpc::messages::AppInfoReply;

/// Capabilities an application advertises through the `type` bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCapability {
    /// No capability bits set
    Console,
    Server,
    Client,
    Gui,
    Web,
}

impl AppCapability {
    pub const ALL: [AppCapability; 5] = [
        AppCapability::Console,
        AppCapability::Server,
        AppCapability::Client,
        AppCapability::Gui,
        AppCapability::Web,
    ];

    pub fn bit(self) -> u32 {
        match self {
            AppCapability::Console => 0x00,
            AppCapability::Server => 0x01,
            AppCapability::Client => 0x02,
            AppCapability::Gui => 0x04,
            AppCapability::Web => 0x08,
        }
    }
}

/// Application info as received from (or served by) the `App` service
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppInfo {
    pub name: String,
    pub major_version: i32,
    pub minor_version: i32,
    pub patch_version: i32,
    pub app_type: u32,
}

impl AppInfo {
    /// `Console` holds only when no other capability bit is set
    pub fn has_capability(&self, capability: AppCapability) -> bool {
        match capability {
            AppCapability::Console => self.app_type == 0,
            other => self.app_type & other.bit() != 0,
        }
    }

    pub fn capabilities(&self) -> Vec<AppCapability> {
        AppCapability::ALL
            .into_iter()
            .filter(|c| self.has_capability(*c))
            .collect()
    }

    /// Full `major.minor.patch` version
    pub fn version_string(&self) -> String {
        format!(
            "{}.{}.{}",
            self.major_version, self.minor_version, self.patch_version
        )
    }
}

impl fmt::Display for AppInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_app_name(
            &self.name,
            self.major_version,
            self.minor_version,
        ))
    }
}

impl From<AppInfoReply> for AppInfo {
    fn from(reply: AppInfoReply) -> Self {
        Self {
            name: reply.name,
            major_version: reply.major_version,
            minor_version: reply.minor_version,
            patch_version: reply.patch_version,
            app_type: reply.r#type,
        }
    }
}

impl From<&AppInfo> for AppInfoReply {
    fn from(info: &AppInfo) -> Self {
        Self {
            name: info.name.clone(),
            major_version: info.major_version,
            minor_version: info.minor_version,
            patch_version: info.patch_version,
            r#type: info.app_type,
        }
    }
}
