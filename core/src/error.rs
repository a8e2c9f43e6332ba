//! Error types for the web service connectors.
//!
//! # Design
//! `Unauthorized` gets a dedicated variant because a rejected login must be
//! distinguishable from every other failure. Transport and HTTP failures keep
//! the numeric status code, which is also the diagnostic text handed to the
//! caller. `NotLoggedIn` never reaches the network.

use thiserror::Error;

use crate::http::HttpResponse;

/// Every way a connector request can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectorError {
    /// The exchange never produced an HTTP status (unreachable host, reset
    /// connection, timeout in the transport).
    #[error("transport failure: {message}")]
    Transport { message: String },

    /// The server answered with an error status.
    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// The server rejected the login credentials with 401.
    #[error("401 unauthorized")]
    Unauthorized,

    /// An authenticated request was attempted without an active session.
    #[error("Not logged in!")]
    NotLoggedIn,

    #[error("configuration unavailable: {0}")]
    Config(String),

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl ConnectorError {
    /// Build the error for a response the transport flagged as failed.
    pub fn from_response(response: &HttpResponse) -> Self {
        if response.status == 0 {
            ConnectorError::Transport {
                message: response.error.clone(),
            }
        } else {
            ConnectorError::HttpStatus {
                status: response.status,
                message: response.error.clone(),
            }
        }
    }

    /// Status code of the failed exchange, 0 when no status was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ConnectorError::Transport { .. } => Some(0),
            ConnectorError::HttpStatus { status, .. } => Some(*status),
            ConnectorError::Unauthorized => Some(401),
            _ => None,
        }
    }

    /// Text delivered to the caller in an `Outcome::Error`.
    ///
    /// Exchange failures report the bare status code; local failures report
    /// their message.
    pub fn diagnostic(&self) -> String {
        match self.status() {
            Some(status) => status.to_string(),
            None => self.to_string(),
        }
    }
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl From<ConfigError> for ConnectorError {
    fn from(err: ConfigError) -> Self {
        ConnectorError::Config(err.to_string())
    }
}
