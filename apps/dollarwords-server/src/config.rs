//! # Server Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     DOLLARWORDS_PORT=9000                                              │
//! │     DOLLARWORDS_RESPONSE_FORMAT=json                                   │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, else $DOLLARWORDS_CONFIG, else                    │
//! │     ~/.config/dollarwords/server.toml (Linux)                          │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     127.0.0.1:8080, 256 byte requests, text responses                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # server.toml
//! [listener]
//! bind_addr = "127.0.0.1"
//! port = 8080
//! max_request_bytes = 256
//! read_timeout_secs = 10
//!
//! [protocol]
//! decimal_separator = "either"  # dot | comma | either
//! response_format = "text"      # text | json
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{ServerError, ServerResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "DOLLARWORDS_CONFIG";

// =============================================================================
// Decimal Separator
// =============================================================================

/// Which character separates dollars from cents in a request.
///
/// Requests arrive as plain text with no locale attached, so the separator
/// is a deployment decision instead of whatever the host locale says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecimalSeparator {
    /// `12.50`
    Dot,
    /// `12,50`
    Comma,
    /// Either of the above.
    #[default]
    Either,
}

impl DecimalSeparator {
    /// Returns true if `c` is accepted as the separator.
    pub fn accepts(&self, c: char) -> bool {
        match self {
            DecimalSeparator::Dot => c == '.',
            DecimalSeparator::Comma => c == ',',
            DecimalSeparator::Either => c == '.' || c == ',',
        }
    }
}

impl std::fmt::Display for DecimalSeparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecimalSeparator::Dot => write!(f, "dot"),
            DecimalSeparator::Comma => write!(f, "comma"),
            DecimalSeparator::Either => write!(f, "either"),
        }
    }
}

impl std::str::FromStr for DecimalSeparator {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dot" | "." => Ok(DecimalSeparator::Dot),
            "comma" | "," => Ok(DecimalSeparator::Comma),
            "either" | "any" => Ok(DecimalSeparator::Either),
            other => Err(ServerError::InvalidConfig(format!(
                "Unknown decimal separator: '{}'. Valid options: dot, comma, either",
                other
            ))),
        }
    }
}

// =============================================================================
// Response Format
// =============================================================================

/// Wire format of the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// The phrase itself, or a one-line prefixed error message.
    #[default]
    Text,
    /// A JSON object with a `status` field.
    Json,
}

impl std::fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseFormat::Text => write!(f, "text"),
            ResponseFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ResponseFormat {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(ResponseFormat::Text),
            "json" => Ok(ResponseFormat::Json),
            other => Err(ServerError::InvalidConfig(format!(
                "Unknown response format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

// =============================================================================
// Listener Settings
// =============================================================================

/// Socket settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListenerSettings {
    /// Bind address (default: 127.0.0.1, local clients only).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// TCP port. 0 picks a free port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest request read from a client, in bytes.
    #[serde(default = "default_max_request_bytes")]
    pub max_request_bytes: usize,

    /// How long to wait for the request before dropping the client (seconds).
    #[serde(default = "default_read_timeout")]
    pub read_timeout_secs: u64,
}

fn default_bind_addr() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_request_bytes() -> usize {
    256
}

fn default_read_timeout() -> u64 {
    10
}

impl Default for ListenerSettings {
    fn default() -> Self {
        ListenerSettings {
            bind_addr: default_bind_addr(),
            port: default_port(),
            max_request_bytes: default_max_request_bytes(),
            read_timeout_secs: default_read_timeout(),
        }
    }
}

impl ListenerSettings {
    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

// =============================================================================
// Protocol Settings
// =============================================================================

/// How requests are read and responses written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolSettings {
    #[serde(default)]
    pub decimal_separator: DecimalSeparator,

    #[serde(default)]
    pub response_format: ResponseFormat,
}

// =============================================================================
// Main Server Configuration
// =============================================================================

/// Complete server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub listener: ListenerSettings,

    #[serde(default)]
    pub protocol: ProtocolSettings,
}

impl ServerConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (server.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ServerResult<Self> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading server config from file");
                let contents = std::fs::read_to_string(&path).map_err(|e| {
                    ServerError::ConfigLoadFailed(format!("{}: {}", path.display(), e))
                })?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ServerResult<()> {
        if self.listener.bind_addr.trim().is_empty() {
            return Err(ServerError::InvalidConfig(
                "bind_addr must not be empty".into(),
            ));
        }

        if self.listener.max_request_bytes == 0 {
            return Err(ServerError::InvalidConfig(
                "max_request_bytes must be greater than 0".into(),
            ));
        }

        if self.listener.read_timeout_secs == 0 {
            return Err(ServerError::InvalidConfig(
                "read_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies overrides from `lookup` (the process environment in
    /// production). Unparsable values are logged and ignored.
    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(addr) = lookup("DOLLARWORDS_BIND_ADDR") {
            debug!(addr = %addr, "Overriding bind address from environment");
            self.listener.bind_addr = addr;
        }

        if let Some(port) = lookup("DOLLARWORDS_PORT") {
            match port.parse::<u16>() {
                Ok(p) => {
                    debug!(port = p, "Overriding port from environment");
                    self.listener.port = p;
                }
                Err(_) => warn!(port = %port, "Invalid DOLLARWORDS_PORT in environment"),
            }
        }

        if let Some(bytes) = lookup("DOLLARWORDS_MAX_REQUEST_BYTES") {
            match bytes.parse::<usize>() {
                Ok(b) => self.listener.max_request_bytes = b,
                Err(_) => warn!(value = %bytes, "Invalid DOLLARWORDS_MAX_REQUEST_BYTES in environment"),
            }
        }

        if let Some(secs) = lookup("DOLLARWORDS_READ_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.listener.read_timeout_secs = s,
                Err(_) => warn!(value = %secs, "Invalid DOLLARWORDS_READ_TIMEOUT_SECS in environment"),
            }
        }

        if let Some(sep) = lookup("DOLLARWORDS_DECIMAL_SEPARATOR") {
            match sep.parse() {
                Ok(parsed) => self.protocol.decimal_separator = parsed,
                Err(e) => warn!(error = %e, "Ignoring DOLLARWORDS_DECIMAL_SEPARATOR"),
            }
        }

        if let Some(format) = lookup("DOLLARWORDS_RESPONSE_FORMAT") {
            match format.parse() {
                Ok(parsed) => self.protocol.response_format = parsed,
                Err(e) => warn!(error = %e, "Ignoring DOLLARWORDS_RESPONSE_FORMAT"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "dollarwords")
            .map(|dirs| dirs.config_dir().join("server.toml"))
    }
}
