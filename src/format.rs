//! Rendering of application info replies

/// Render an application name and version as `"<name> version <major>.<minor>"`.
///
/// Never fails, empty names and zero versions are rendered as they are.
pub fn format_app_name(name: &str, major: i32, minor: i32) -> String {
    format!("{name} version {major}.{minor}")
}

/// The log line written by the `info` command.
pub fn app_info_line(formatted: &str) -> String {
    format!("Application Name and Version: {formatted}")
}
