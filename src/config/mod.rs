// Configuration settings for the Caffa App client and reference server
pub mod settings;
/// Connection target and served application info
pub mod types;
pub mod util;

// Re-export for convenience
pub use settings::Settings;
pub use types::{AppSettings, ConnectionTarget};
pub use util::init_default_dir;
