//! # Application State
//!
//! Shared state for the Axum application: server configuration plus the
//! channel settings the per-request service builder consumes.

use rail_channels::ChannelSettings;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application config
    pub config: AppConfig,
    /// Notification channel settings (from `config/channels.toml` or defaults)
    pub channels: ChannelSettings,
}

impl AppState {
    /// Create state from the environment and config files
    pub fn new() -> Self {
        Self {
            config: AppConfig::from_env(),
            channels: ChannelSettings::load(),
        }
    }

    /// Create state with explicit parts (for testing)
    pub fn with_parts(config: AppConfig, channels: ChannelSettings) -> Self {
        Self { config, channels }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
