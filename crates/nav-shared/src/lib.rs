//! # Navigation Shared
//! 
//! Configuration, telemetry, and application errors shared by the navigation crates.

pub mod constants;
pub mod telemetry;
pub mod config;
pub mod error;

pub use config::{AppConfig, LogFormat, TelemetrySettings};
pub use error::AppError;
