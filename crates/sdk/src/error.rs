//! SDK Error Types

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Status carried by transport and server failures
pub const STATUS_TRANSPORT: u16 = 500;

/// Status carried when the service answered 2xx with an unusable body
pub const STATUS_MALFORMED: u16 = 503;

/// Message used when a failed response had no body at all
pub const UNKNOWN_ERROR: &str = "Unknown Error";

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// Error payload of a failed RPC call
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorPayload {
    /// The `error` field of a JSON error body, verbatim
    Service(Value),
    /// Synthesized text when the body was missing or not JSON
    Message(String),
}

impl ErrorPayload {
    /// Build the payload from a raw non-2xx response body.
    pub fn from_body(body: &str) -> Self {
        if body.is_empty() {
            return ErrorPayload::Message(UNKNOWN_ERROR.to_string());
        }

        match serde_json::from_str::<Value>(body) {
            // `null` parses but has no fields to read an error from
            Ok(Value::Null) | Err(_) => ErrorPayload::Message(format!("Unknown error - {}", body)),
            Ok(mut parsed) => {
                let error = parsed
                    .get_mut("error")
                    .map(Value::take)
                    .unwrap_or(Value::Null);
                ErrorPayload::Service(error)
            }
        }
    }

    /// The service-supplied payload, if the body was JSON
    pub fn as_service(&self) -> Option<&Value> {
        match self {
            ErrorPayload::Service(v) => Some(v),
            ErrorPayload::Message(_) => None,
        }
    }

    /// The synthesized message, if the body was missing or not JSON
    pub fn as_message(&self) -> Option<&str> {
        match self {
            ErrorPayload::Message(m) => Some(m),
            ErrorPayload::Service(_) => None,
        }
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPayload::Message(m) => f.write_str(m),
            // Most services send {"message": ...}; prefer it when present
            ErrorPayload::Service(v) => match v.get("message").and_then(Value::as_str) {
                Some(m) => f.write_str(m),
                None => write!(f, "{}", v),
            },
        }
    }
}

/// SDK Error
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Malformed response from {url}: {reason}")]
    MalformedResponse {
        url: String,
        body: String,
        reason: String,
    },

    #[error("Transport error (HTTP {http_status}): {payload}")]
    Transport {
        http_status: u16,
        payload: ErrorPayload,
    },

    #[error("Connection error ({url}): {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No tokio runtime: {0}")]
    NoRuntime(String),

    #[error("Call cancelled")]
    Cancelled,

    #[error("Other error: {0}")]
    Other(String),
}

impl SdkError {
    /// Status classification of a failed call.
    ///
    /// 503 for malformed responses, 500 for transport failures, `None` for
    /// errors raised before any request was sent.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::MalformedResponse { .. } => Some(STATUS_MALFORMED),
            SdkError::Transport { .. } | SdkError::Connection { .. } => Some(STATUS_TRANSPORT),
            _ => None,
        }
    }

    /// Error payload for transport-class failures.
    ///
    /// A connection failure never produced a body, so it reports
    /// [`UNKNOWN_ERROR`] like an empty error response.
    pub fn payload(&self) -> Option<ErrorPayload> {
        match self {
            SdkError::Transport { payload, .. } => Some(payload.clone()),
            SdkError::Connection { .. } => Some(ErrorPayload::Message(UNKNOWN_ERROR.to_string())),
            _ => None,
        }
    }

    /// Raw response body, for malformed responses
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            SdkError::MalformedResponse { body, .. } => Some(body),
            _ => None,
        }
    }

    pub(crate) fn malformed(url: &str, body: String, reason: impl Into<String>) -> Self {
        SdkError::MalformedResponse {
            url: url.to_string(),
            body,
            reason: reason.into(),
        }
    }
}
