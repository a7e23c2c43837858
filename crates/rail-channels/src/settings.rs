//! # Channel Settings
//!
//! Notification channel configuration, loaded from `config/channels.toml`
//! when present. Every field has a working default so a bare checkout of the
//! repo runs without any config file.

use serde::{Deserialize, Serialize};

/// Default SMS gateway identifier used when none is configured
pub const DEFAULT_SMS_GATEWAY: &str = "mercury-sms";

/// Default sender address for email notifications
pub const DEFAULT_EMAIL_SENDER: &str = "receipts@payrail.dev";

/// Settings for the built-in notification channels
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelSettings {
    /// Sender address stamped on email notifications
    pub email_sender: String,

    /// Gateway identifier the SMS notifier hands messages to
    pub sms_gateway: String,
}

impl Default for ChannelSettings {
    fn default() -> Self {
        Self {
            email_sender: DEFAULT_EMAIL_SENDER.to_string(),
            sms_gateway: DEFAULT_SMS_GATEWAY.to_string(),
        }
    }
}

impl ChannelSettings {
    /// Parse settings from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings from the conventional config locations, falling back to
    /// defaults when no file is found.
    pub fn load() -> Self {
        let config_paths = [
            "config/channels.toml",
            "../config/channels.toml",
            "../../config/channels.toml",
        ];

        for path in config_paths {
            if let Ok(content) = std::fs::read_to_string(path) {
                match Self::from_toml(&content) {
                    Ok(settings) => {
                        tracing::info!("Loaded channel settings from {}", path);
                        return settings;
                    }
                    Err(e) => {
                        tracing::warn!("Ignoring unparseable {}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("No channel settings file found, using defaults");
        Self::default()
    }
}
