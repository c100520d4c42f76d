use serde::Deserialize;
use service_core::config::{self as core_config, ServerConfig, TelemetryConfig};
use service_core::error::AppError;

/// File stem of the optional configuration file (`configuration.yaml`, ...).
pub const CONFIGURATION_FILE: &str = "configuration";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            server: ServerConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

fn default_service_name() -> String {
    "qr-service".to_string()
}

impl Settings {
    /// Loads settings from `configuration.*` and `APP_*` variables.
    pub fn load() -> Result<Self, AppError> {
        core_config::load(CONFIGURATION_FILE)
    }
}
