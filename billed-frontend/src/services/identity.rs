//! Read access to the identity left behind by the login flow.

use crate::error::AppError;
use crate::models::User;
use dashmap::DashMap;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

pub const USER_KEY: &str = "user";

/// String key-value store with browser local-storage semantics.
#[derive(Debug, Default)]
pub struct LocalStorage {
    items: DashMap<String, String>,
}

impl LocalStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON object of string values, e.g. `{"user": "{\"type\":\"Employee\"}"}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "Failed to read local storage");
            AppError::Internal(anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
        })?;
        let entries: HashMap<String, String> = serde_json::from_str(&content)?;

        Ok(Self {
            items: entries.into_iter().collect(),
        })
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).map(|value| value.value().clone())
    }

    pub fn set_item(&self, key: impl Into<String>, value: impl Into<String>) {
        self.items.insert(key.into(), value.into());
    }
}

/// Source of the signed-in user, consulted once per operation.
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> Result<User, AppError>;
}

/// Reads the `user` entry of a [`LocalStorage`].
pub struct StoredIdentity {
    storage: Arc<LocalStorage>,
}

impl StoredIdentity {
    pub fn new(storage: Arc<LocalStorage>) -> Self {
        Self { storage }
    }
}

impl IdentityProvider for StoredIdentity {
    fn current_user(&self) -> Result<User, AppError> {
        let raw = self
            .storage
            .get_item(USER_KEY)
            .ok_or_else(|| AppError::Unauthorized("no signed-in user".to_string()))?;

        serde_json::from_str(&raw).map_err(|e| {
            tracing::warn!(error = %e, "Stored user entry is malformed");
            AppError::Unauthorized(format!("malformed user entry: {}", e))
        })
    }
}

/// A fixed identity.
pub struct StaticIdentity(pub User);

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Result<User, AppError> {
        Ok(self.0.clone())
    }
}
