//! Configuration management

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_APP_NAME, DEFAULT_ENV, DEFAULT_LOG_FILTER};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub navigation: NavigationSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NavigationSettings {
    /// JSON menu graph to use instead of the built-in catalog
    #[serde(default)]
    pub menu_graph_path: Option<String>,
    /// Abort startup when the menu graph has validation findings
    pub strict_validation: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    pub filter: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::Json,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_ENV.into());
        Self::load_for(&env)
    }

    /// Layered load: defaults, `config/default`, `config/{env}`, then environment.
    pub fn load_for(env: &str) -> Result<Self, AppError> {
        let config = Self::defaults(env)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    fn defaults(
        env: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, AppError> {
        Ok(Config::builder()
            .set_default("app.env", env)?
            .set_default("app.name", DEFAULT_APP_NAME)?
            .set_default("navigation.strict_validation", true)?
            .set_default("telemetry.filter", DEFAULT_LOG_FILTER)?
            .set_default("telemetry.format", "json")?)
    }
}
