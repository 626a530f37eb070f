//! Mux Core Library
//!
//! This crate provides the typed Mux Video records, the schema-driven
//! normalization layer that turns raw API JSON into those records, the shared
//! error types, and client configuration. It performs no I/O; the HTTP side
//! lives in `mux-api-client`.

pub mod config;
pub mod error;
pub mod models;
pub mod normalize;

// Re-export commonly used types
pub use config::MuxConfig;
pub use error::{ErrorMetadata, LogLevel, NormalizeError};
pub use normalize::{
    coerce_epoch, normalize, normalize_body, normalize_many, Cardinality, Field, FieldKind,
    Normalizable, Normalized, ScalarKind, Schema,
};
