//! Error types module
//!
//! Normalization failures are reported through `NormalizeError`. Every error in
//! the workspace also describes itself through the `ErrorMetadata` trait so a
//! caller can decide how loudly to log it and whether re-issuing the call makes
//! sense, without matching on every variant.

use serde_json::Value;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like a missing resource
    Debug,
    /// Warning level - for vendor rejections and malformed payloads
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata describing how an error should be treated by the caller.
pub trait ErrorMetadata {
    /// HTTP status reported by the vendor, when the failure came with one
    fn status_code(&self) -> Option<u16>;

    /// Machine-readable error code (e.g., "TYPE_COERCION")
    fn error_code(&self) -> &'static str;

    /// Whether re-issuing the same call may succeed
    fn is_recoverable(&self) -> bool;

    /// Suggested action for the caller
    fn suggested_action(&self) -> Option<&'static str>;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

/// Failure while turning a decoded response body into a typed record.
///
/// `path` locates the offending value, starting at the record name:
/// `Asset.tracks[1].duration`, `LiveStream.created_at`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizeError {
    #[error("Type coercion error at {path}: expected {expected}, found {found}")]
    TypeCoercion {
        path: String,
        expected: String,
        found: String,
    },

    #[error("Shape mismatch at {path}: expected {expected}, found {found}")]
    ShapeMismatch {
        path: String,
        expected: String,
        found: String,
    },
}

impl NormalizeError {
    pub fn type_coercion(
        path: impl Into<String>,
        expected: impl Into<String>,
        found: &Value,
    ) -> Self {
        NormalizeError::TypeCoercion {
            path: path.into(),
            expected: expected.into(),
            found: describe_value(found),
        }
    }

    pub fn shape_mismatch(
        path: impl Into<String>,
        expected: impl Into<String>,
        found: &Value,
    ) -> Self {
        NormalizeError::ShapeMismatch {
            path: path.into(),
            expected: expected.into(),
            found: describe_value(found),
        }
    }

    /// Re-anchor the error at `path`.
    pub fn at(self, path: impl Into<String>) -> Self {
        match self {
            NormalizeError::TypeCoercion {
                expected, found, ..
            } => NormalizeError::TypeCoercion {
                path: path.into(),
                expected,
                found,
            },
            NormalizeError::ShapeMismatch {
                expected, found, ..
            } => NormalizeError::ShapeMismatch {
                path: path.into(),
                expected,
                found,
            },
        }
    }

    pub fn path(&self) -> &str {
        match self {
            NormalizeError::TypeCoercion { path, .. } => path,
            NormalizeError::ShapeMismatch { path, .. } => path,
        }
    }

    pub fn is_type_coercion(&self) -> bool {
        matches!(self, NormalizeError::TypeCoercion { .. })
    }

    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, NormalizeError::ShapeMismatch { .. })
    }
}

impl ErrorMetadata for NormalizeError {
    fn status_code(&self) -> Option<u16> {
        None
    }

    fn error_code(&self) -> &'static str {
        match self {
            NormalizeError::TypeCoercion { .. } => "TYPE_COERCION",
            NormalizeError::ShapeMismatch { .. } => "SHAPE_MISMATCH",
        }
    }

    fn is_recoverable(&self) -> bool {
        false
    }

    fn suggested_action(&self) -> Option<&'static str> {
        Some("Check the response payload against the record definition")
    }

    fn log_level(&self) -> LogLevel {
        LogLevel::Warn
    }
}

/// Short human description of a JSON value for error messages.
pub(crate) fn describe_value(value: &Value) -> String {
    const MAX_SHOWN: usize = 40;

    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {}", b),
        Value::Number(n) if n.is_f64() => format!("float {}", n),
        Value::Number(n) => format!("integer {}", n),
        Value::String(s) if s.chars().count() > MAX_SHOWN => {
            let shown: String = s.chars().take(MAX_SHOWN).collect();
            format!("string {:?}...", shown)
        }
        Value::String(s) => format!("string {:?}", s),
        Value::Array(items) => format!("array of {} element(s)", items.len()),
        Value::Object(_) => "object".to_string(),
    }
}
