//! Layered configuration loading shared by Billed crates.
//!
//! Settings are read from `<crate>/config/base.yaml` and then overridden by
//! environment variables prefixed with `APP_`, using `__` to address nested
//! keys (e.g. `APP_STORE__BASE_URL`).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Telemetry settings understood by [`crate::observability::init_tracing`].
#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP gRPC collector endpoint. Tracing export is disabled when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Resolve the configuration directory for `crate_name`.
///
/// Works both when running from the workspace root and from inside the
/// crate directory itself.
pub fn configuration_directory(base_path: &Path, crate_name: &str) -> PathBuf {
    if base_path.ends_with(crate_name) {
        base_path.join("config")
    } else {
        base_path.join(crate_name).join("config")
    }
}

/// Load settings for `crate_name` relative to the current working directory.
pub fn load_settings<T: DeserializeOwned>(crate_name: &str) -> Result<T, ConfigError> {
    dotenvy::dotenv().ok();

    let base_path = std::env::current_dir()
        .map_err(|e| ConfigError::Message(format!("Failed to determine the current directory: {}", e)))?;

    load_settings_from(&configuration_directory(&base_path, crate_name))
}

/// Load settings from an explicit configuration directory.
pub fn load_settings_from<T: DeserializeOwned>(directory: &Path) -> Result<T, ConfigError> {
    let settings = Config::builder()
        .add_source(File::from(directory.join("base.yaml")).required(true))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<T>()
}
