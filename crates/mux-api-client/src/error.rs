//! Client error types
//!
//! Every operation returns `Result<T, MuxError>`. Vendor-reported failures keep
//! the HTTP status, the vendor's reason string and all detail messages, so a
//! caller can tell "not found" from "rate limited" without parsing text.

use mux_core::{ErrorMetadata, LogLevel, NormalizeError};
use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A failure reported by the Mux API: `{"error": {"type": ..., "messages": [...]}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    /// Vendor error type, e.g. `not_found`, `invalid_parameters`.
    pub reason: String,
    pub details: Vec<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    error_type: Option<String>,
    #[serde(default)]
    messages: Vec<String>,
}

impl ApiError {
    /// Build from a non-success response body. Bodies that are not the vendor's
    /// error envelope fall back to the status reason and the raw text.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body) {
            return Self {
                status,
                reason: envelope
                    .error
                    .error_type
                    .unwrap_or_else(|| status_reason(status)),
                details: envelope.error.messages,
            };
        }

        let text = String::from_utf8_lossy(body).trim().to_string();
        Self {
            status,
            reason: status_reason(status),
            details: if text.is_empty() { Vec::new() } else { vec![text] },
        }
    }

    pub fn first_detail(&self) -> Option<&str> {
        self.details.first().map(String::as_str)
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.first_detail() {
            Some(detail) => write!(f, "{} {}: {}", self.status, self.reason, detail),
            None => write!(f, "{} {}", self.status, self.reason),
        }
    }
}

/// `404` -> `not_found`
fn status_reason(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(|r| r.to_lowercase().replace(' ', "_"))
        .unwrap_or_else(|| "unknown_error".to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum MuxError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Mux API error: {0}")]
    Api(ApiError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<validator::ValidationErrors> for MuxError {
    fn from(err: validator::ValidationErrors) -> Self {
        MuxError::InvalidInput(format!("Validation error: {}", err))
    }
}

impl MuxError {
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            MuxError::Api(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.api_error().is_some_and(|e| e.status == 404)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.api_error().is_some_and(|e| e.status == 429)
    }
}

/// Static metadata per variant: (error_code, recoverable, suggested_action, log_level).
fn mux_error_static_metadata(
    err: &MuxError,
) -> (&'static str, bool, Option<&'static str>, LogLevel) {
    match err {
        MuxError::Transport(e) => (
            "TRANSPORT_ERROR",
            e.is_timeout() || e.is_connect(),
            Some("Check network connectivity and retry"),
            LogLevel::Error,
        ),
        MuxError::Api(e) => match e.status {
            401 | 403 => (
                "UNAUTHORIZED",
                false,
                Some("Check MUX_TOKEN_ID and MUX_TOKEN_SECRET"),
                LogLevel::Warn,
            ),
            404 => (
                "NOT_FOUND",
                false,
                Some("Verify the resource ID exists"),
                LogLevel::Debug,
            ),
            429 => (
                "RATE_LIMITED",
                true,
                Some("Wait before issuing more requests"),
                LogLevel::Warn,
            ),
            400 | 422 => (
                "INVALID_REQUEST",
                false,
                Some("Check request parameters and try again"),
                LogLevel::Warn,
            ),
            500..=599 => (
                "VENDOR_ERROR",
                true,
                Some("Retry after a short delay"),
                LogLevel::Error,
            ),
            _ => ("API_ERROR", false, None, LogLevel::Warn),
        },
        MuxError::Normalize(e) => (
            e.error_code(),
            e.is_recoverable(),
            e.suggested_action(),
            e.log_level(),
        ),
        MuxError::Encode(_) => ("ENCODE_ERROR", false, None, LogLevel::Error),
        MuxError::InvalidInput(_) => (
            "INVALID_INPUT",
            false,
            Some("Check request parameters and try again"),
            LogLevel::Debug,
        ),
    }
}

impl ErrorMetadata for MuxError {
    fn status_code(&self) -> Option<u16> {
        match self {
            MuxError::Transport(e) => e.status().map(|s| s.as_u16()),
            MuxError::Api(e) => Some(e.status),
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        mux_error_static_metadata(self).0
    }

    fn is_recoverable(&self) -> bool {
        mux_error_static_metadata(self).1
    }

    fn suggested_action(&self) -> Option<&'static str> {
        mux_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        mux_error_static_metadata(self).3
    }
}
