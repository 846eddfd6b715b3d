//! Error taxonomy of the bill synchronization layer.

use thiserror::Error;

/// A stored record that cannot be turned into its display form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unknown bill status: {0:?}")]
    UnknownStatus(String),

    #[error("invalid bill date: {0:?}")]
    InvalidDate(String),

    #[error("unknown status label: {0:?}")]
    UnknownLabel(String),
}

/// A receipt file refused before it ever reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{file_name}: .{extension} files are not accepted (jpg, jpeg or png only)")]
    UnsupportedExtension {
        file_name: String,
        extension: String,
    },

    #[error("{0}: file has no extension (jpg, jpeg or png only)")]
    MissingExtension(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Remote list/create/update rejection. Displays the store's message as-is.
    #[error("{0}")]
    Fetch(String),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Text shown to the employee when this error reaches a view.
    pub fn display_message(&self) -> String {
        match self {
            AppError::Fetch(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(anyhow::Error::new(err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(anyhow::Error::new(err))
    }
}
