use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid settings file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Cannot find the home directory, use --dirsettings to choose a settings folder")]
    NoHomeDir,
    #[error("Cannot listen on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid connection target {target}: {reason}")]
    InvalidTarget { target: String, reason: String },
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
    #[error("Remote call failed: {}", .0.message())]
    Status(#[from] tonic::Status),
}
