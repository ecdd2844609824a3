//! CLI

use crate::config::util::init_default_dir;
use crate::config::Settings;
use crate::error::Result;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "caffa-appinfo",
    about = "Query the application info of a Caffa App service",
    version
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Set folder for the settings file - default is HOME/.caffa
    #[arg(short, long, global = true)]
    pub dirsettings: Option<String>,
    /// Override the configured host
    #[arg(long, global = true)]
    pub host: Option<String>,
    /// Override the configured port
    #[arg(short, long, global = true)]
    pub port: Option<u16>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Commands {
    /// Log the application name and version (default)
    #[default]
    Info,
    /// Check that the server answers
    Ping,
    /// Ask the server to shut down
    Quit,
    /// Run the reference App server on the configured address
    Serve,
}

/// Initialize the settings folder and load the settings, applying the target overrides
/// Default folder is HOME/.caffa but user can specify a custom folder with dirsettings (-d) parameter
pub fn settings_init(cli: &Cli) -> Result<Settings> {
    let settings_dir = init_default_dir(cli.dirsettings.clone())?;
    let settings = Settings::load(&settings_dir)?;
    Ok(settings.with_target_overrides(cli.host.clone(), cli.port))
}
