//! Unified SDK error types.

use crate::domain::DecodeError;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// Well-formed response with `ok: false`; carries the server's `error` text.
    #[error("Application error: {0}")]
    Application(String),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// HTTP-layer errors: everything that goes wrong before a payload with a
/// boolean `ok` field is in hand.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl HttpError {
    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Construction-time errors. Returned from the client builder before any
/// request is sent.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    #[cfg(feature = "http")]
    #[error("HTTP client could not be built: {0}")]
    Client(reqwest::Error),
}
