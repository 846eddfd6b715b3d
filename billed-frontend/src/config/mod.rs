use billed_core::config::{load_settings, TelemetrySettings};
use secrecy::Secret;
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Clone, Validate)]
pub struct Settings {
    #[validate(nested)]
    pub store: StoreSettings,
    pub identity: IdentitySettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone, Validate)]
pub struct StoreSettings {
    /// Root URL of the remote resource store (e.g. http://localhost:5678).
    #[validate(url)]
    pub base_url: String,
    /// Remote collection holding bill records.
    #[serde(default = "default_collection")]
    pub collection: String,
    /// Bearer token sent with every store request, when the store requires one.
    #[serde(default)]
    pub api_token: Option<Secret<String>>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_collection() -> String {
    "bills".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Deserialize, Clone)]
pub struct IdentitySettings {
    /// JSON key-value file holding the signed-in `user` entry.
    pub storage_path: String,
}

pub fn get_configuration() -> Result<Settings, crate::error::AppError> {
    let settings: Settings = load_settings("billed-frontend")?;
    settings
        .validate()
        .map_err(|e| crate::error::AppError::Internal(anyhow::anyhow!("Invalid configuration: {}", e)))?;
    Ok(settings)
}
