/// Utility functions for the config module
/// It includes functions to initialize the default settings directory and create a settings file from the template if it doesn't exist.
use std::path::PathBuf;

use crate::config::settings::SETTINGS_FILE;
use crate::error::{AppError, Result};

/// Resolve the settings folder, `HOME/.caffa` unless a custom path is given.
pub fn settings_dir(config_path: Option<String>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(PathBuf::from(path)),
        None => dirs::home_dir()
            .map(|home| home.join(".caffa"))
            .ok_or(AppError::NoHomeDir),
    }
}

/// Initialize the settings directory and create the settings file from the template if it is missing.
pub fn init_default_dir(config_path: Option<String>) -> Result<PathBuf> {
    let settings_dir = settings_dir(config_path)?;

    std::fs::create_dir_all(&settings_dir).map_err(|source| AppError::Io {
        path: settings_dir.clone(),
        source,
    })?;

    let config_path = settings_dir.join(SETTINGS_FILE);
    if !config_path.exists() {
        std::fs::write(&config_path, include_bytes!("../../settings.tpl.toml")).map_err(
            |source| AppError::Io {
                path: config_path.clone(),
                source,
            },
        )?;

        tracing::info!(
            "Created settings file from template at {}",
            config_path.display()
        );
    }

    Ok(settings_dir)
}
