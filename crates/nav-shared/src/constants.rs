//! Application-wide constants

pub const DEFAULT_ENV: &str = "development";
pub const DEFAULT_APP_NAME: &str = "nav-preview";
pub const DEFAULT_LOG_FILTER: &str = "info";
