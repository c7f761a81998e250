//! Error kinds surfaced by the notification utilities.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Reason reported when a send is attempted without a webhook URL.
pub const WEBHOOK_URL_NOT_CONFIGURED: &str = "webhook_url_not_configured";

/// Failure reported by the webhook endpoint or its transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}{}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
pub struct DeliveryError {
    /// HTTP status, when the endpoint answered at all.
    pub status: Option<u16>,
    /// Endpoint-reported reason (e.g. `invalid_auth`) or the transport error text.
    pub reason: String,
}

impl DeliveryError {
    pub fn new(status: Option<u16>, reason: impl Into<String>) -> Self {
        Self { status, reason: reason.into() }
    }
}

/// Errors that abort a notification run.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// A required setting is missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The input file could not be read or does not match the expected schema.
    #[error("Malformed input in `{}`: {reason}", .path.display())]
    MalformedInput { path: PathBuf, reason: String },

    /// The webhook endpoint rejected the message or could not be reached.
    #[error("Notification delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
}

impl NotifyError {
    pub fn malformed(path: &Path, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

impl From<config::ConfigError> for NotifyError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
