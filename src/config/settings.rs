use crate::config::types::{AppSettings, ConnectionTarget};
use crate::error::{AppError, Result};
use serde::Deserialize;
use std::path::Path;

pub const SETTINGS_FILE: &str = "settings.toml";

// Caffa client configuration settings struct
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Remote App service to query
    pub rpc: ConnectionTarget,
    /// Application info served by `serve`
    pub app: AppSettings,
}

impl Settings {
    /// Parse settings from the contents of a settings file
    pub fn from_toml(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `settings.toml` from the settings folder, missing file means defaults
    pub fn load(settings_dir: &Path) -> Result<Self> {
        let path = settings_dir.join(SETTINGS_FILE);
        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path).map_err(|source| AppError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_toml(&contents, &path)
    }

    /// Replace the configured target with values given on the command line
    pub fn with_target_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.rpc.host = host;
        }
        if let Some(port) = port {
            self.rpc.port = port;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn path() -> PathBuf {
        PathBuf::from("settings.toml")
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = Settings::from_toml("", &path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_rpc_section() {
        let settings = Settings::from_toml("[rpc]\nport = 50000\n", &path()).unwrap();
        assert_eq!(settings.rpc.host, "localhost");
        assert_eq!(settings.rpc.port, 50000);
    }

    #[test]
    fn test_app_section() {
        let toml = r#"
[app]
name = "Radar"
major_version = 3
minor_version = 1
"#;
        let settings = Settings::from_toml(toml, &path()).unwrap();
        assert_eq!(settings.app.name, "Radar");
        assert_eq!(settings.app.major_version, 3);
        assert_eq!(settings.app.minor_version, 1);
        assert_eq!(settings.app.patch_version, 0);
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let result = Settings::from_toml("[rpc]\nport = 70000\n", &path());
        assert!(matches!(result, Err(AppError::Config { .. })));
    }

    #[test]
    fn test_template_matches_defaults() {
        let template = include_str!("../../settings.tpl.toml");
        let settings = Settings::from_toml(template, &path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_target_overrides() {
        let settings = Settings::default().with_target_overrides(Some("10.0.0.2".into()), None);
        assert_eq!(settings.rpc, ConnectionTarget::new("10.0.0.2", 55555));

        let settings = Settings::default().with_target_overrides(None, Some(1234));
        assert_eq!(settings.rpc, ConnectionTarget::new("localhost", 1234));
    }

    #[test]
    fn test_load_missing_dir_gives_defaults() {
        let dir = std::env::temp_dir().join(format!(
            "caffa-appinfo-missing-settings-dir-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        let settings = Settings::load(&dir).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
