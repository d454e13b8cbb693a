//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Signing error: {0}")]
    Signing(#[from] SigningError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,
}

/// Errors from key handling, canonicalization and signing.
#[derive(Error, Debug)]
pub enum SigningError {
    #[error("Signing key not configured")]
    MissingKey,

    #[error("Invalid base64 key material: {0}")]
    InvalidEncoding(String),

    #[error("Invalid key length: expected 32 or 64 bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("Public key half does not match the secret key")]
    KeypairMismatch,

    #[error("Payload must serialize to a JSON object")]
    NotAnObject,

    #[error("Operation is already signed")]
    AlreadySigned,

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Provider dispatch errors.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Unknown provider type: {0}")]
    UnknownProvider(String),
}

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },

    #[error("Invalid signing key in {key}: {source}")]
    InvalidKey {
        key: &'static str,
        #[source]
        source: SigningError,
    },
}
