// src/error.rs
//! Error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes of a client call.
//! Each variant tells where the call failed: before the request left
//! (validation, encoding), on the wire (transport), while reading the
//! body (decode), or because the service said no (remote).

use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::types::ValidationError;
use std::fmt;
use thiserror::Error;

/// Notion API error codes as a typed vocabulary.
///
/// Instead of matching against magic strings like `"rate_limited"`,
/// the domain vocabulary is encoded in the type system. Codes this
/// client doesn't know yet land in `Unknown` with the raw string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// API rate limit exceeded
    RateLimited,
    /// The requested object does not exist or is inaccessible
    ObjectNotFound,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    RestrictedResource,
    /// Request body contains invalid JSON
    InvalidJson,
    /// Request parameters failed Notion's validation
    ValidationFailed,
    /// Conflict with current state of the resource
    Conflict,
    /// Notion internal server error
    InternalError,
    /// Notion is temporarily unavailable
    ServiceUnavailable,
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl NotionErrorCode {
    /// Parse a Notion API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rate_limited" => Self::RateLimited,
            "object_not_found" => Self::ObjectNotFound,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "invalid_json" => Self::InvalidJson,
            "validation_error" => Self::ValidationFailed,
            "conflict_error" => Self::Conflict,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Whether the failure is transient. The client never retries on its
    /// own; this only informs callers that want to.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ServiceUnavailable | Self::InternalError | Self::Conflict
        )
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound)
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::InvalidJson => write!(f, "invalid_json"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::Conflict => write!(f, "conflict_error"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Failures raised while moving bytes to and from the service.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("Transport IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Every way a client operation can fail.
#[derive(Error, Debug)]
pub enum NotionError {
    #[error("Network failure: {0}")]
    Transport(#[from] TransportError),

    #[error("Malformed response: {message} (body: {body})")]
    Decode { message: String, body: String },

    /// The service answered with an error envelope. `code` and `message`
    /// are kept exactly as the service sent them.
    #[error("{status}: {code}: {message}")]
    Remote {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl NotionError {
    /// Builds a decode failure carrying a bounded preview of the offending body.
    pub fn decode(message: impl Into<String>, body: &str) -> Self {
        NotionError::Decode {
            message: message.into(),
            body: preview_body(body),
        }
    }

    /// The typed service error code, when the service reported one.
    pub fn error_code(&self) -> Option<NotionErrorCode> {
        match self {
            NotionError::Remote { code, .. } => Some(NotionErrorCode::from_api_response(code)),
            _ => None,
        }
    }

    /// HTTP status of a remote failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            NotionError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.error_code().is_some_and(|code| code.is_not_found())
    }
}

/// Truncates a body for display without splitting a UTF-8 character.
fn preview_body(body: &str) -> String {
    match body.char_indices().nth(ERROR_BODY_PREVIEW_LENGTH) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

/// Result type alias for convenience
pub type Result<T, E = NotionError> = std::result::Result<T, E>;
