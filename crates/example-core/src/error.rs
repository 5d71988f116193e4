//! Error types for the Example API SDK.
//!
//! This module provides a unified error type with explicit variants for
//! configuration, transport, and response decoding failures.

use std::string::FromUtf8Error;
use thiserror::Error;

/// Boxed error carried by transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The unified error type for SDK operations.
///
/// Every failure is returned to the caller; the SDK never retries or
/// recovers on its own.
#[derive(Debug, Error)]
pub enum Error {
    /// Client configuration is invalid (bad base URL).
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] InvalidConfigError),

    /// The transport failed to complete the request.
    #[error("network error: {0}")]
    Network(#[from] TransportError),

    /// The response completed without a body.
    #[error("response contained no data")]
    NoData,

    /// The response body did not have the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request body could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body is not valid UTF-8 text.
    #[error("response is not valid UTF-8: {0}")]
    InvalidResponse(#[from] FromUtf8Error),

    /// Non-2xx status, only reported under `StatusPolicy::RequireSuccess`.
    #[error("HTTP {status}")]
    Status { status: u16, body: Option<String> },
}

/// Configuration errors raised while constructing a client.
#[derive(Debug, Error)]
pub enum InvalidConfigError {
    /// The base URL failed to parse or validate.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },
}

/// Transport-level errors.
///
/// Each variant keeps the underlying error so callers can inspect it via
/// [`std::error::Error::source`] or [`TransportError::inner`].
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection could not be established (refused, DNS, TLS).
    #[error("connection failed: {0}")]
    Connection(#[source] BoxError),

    /// Request timed out.
    #[error("request timed out: {0}")]
    Timeout(#[source] BoxError),

    /// Request could not be built or sent.
    #[error("request failed: {0}")]
    Request(#[source] BoxError),

    /// Response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(#[source] BoxError),
}

impl TransportError {
    /// Create a connection error from any error type.
    pub fn connection(err: impl Into<BoxError>) -> Self {
        TransportError::Connection(err.into())
    }

    /// Create a timeout error from any error type.
    pub fn timeout(err: impl Into<BoxError>) -> Self {
        TransportError::Timeout(err.into())
    }

    /// Create a generic request error from any error type.
    pub fn request(err: impl Into<BoxError>) -> Self {
        TransportError::Request(err.into())
    }

    /// Create a body read error from any error type.
    pub fn body(err: impl Into<BoxError>) -> Self {
        TransportError::Body(err.into())
    }

    /// Returns the original error reported by the transport.
    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        match self {
            TransportError::Connection(e)
            | TransportError::Timeout(e)
            | TransportError::Request(e)
            | TransportError::Body(e) => e.as_ref(),
        }
    }
}

impl Error {
    /// Returns true if the transport failed before a response arrived.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
    }
}
