//! # Server Error Types
//!
//! Failures of the transport itself. Conversion failures are not errors at
//! this level: they are ordinary responses (see [`crate::protocol`]).
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Encoding            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Io             │  │  Serialization          │ │
//! │  │  ConfigLoad...  │  │  Timeout        │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Server error type covering startup and per-connection failures.
#[derive(Debug, Error)]
pub enum ServerError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid server configuration.
    #[error("Invalid server configuration: {0}")]
    InvalidConfig(String),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Socket or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The client sent nothing within the read timeout.
    #[error("Client sent no data within {0} seconds")]
    Timeout(u64),

    // =========================================================================
    // Encoding Errors
    // =========================================================================
    /// Failed to serialize a JSON response.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for ServerError {
    fn from(err: toml::de::Error) -> Self {
        ServerError::ConfigLoadFailed(err.to_string())
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ServerError::Timeout(10).to_string(),
            "Client sent no data within 10 seconds"
        );
        assert_eq!(
            ServerError::InvalidConfig("port".into()).to_string(),
            "Invalid server configuration: port"
        );
    }

    #[test]
    fn test_toml_error_converts_to_config_load_failure() {
        let err: ServerError = toml::from_str::<toml::Value>("= nope").unwrap_err().into();
        assert!(matches!(err, ServerError::ConfigLoadFailed(_)));
    }
}
