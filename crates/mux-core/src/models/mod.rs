//! Typed Mux Video records
//!
//! One module per API resource shape. Every record implements
//! [`Normalizable`](crate::normalize::Normalizable) with its own field table,
//! and is meant to be built through [`normalize`](crate::normalize::normalize)
//! rather than deserialized from the raw API body directly.

mod asset;
mod asset_info;
mod live_stream;
mod playback_id;
mod simulcast_target;
mod track;

// Re-export all models for convenient imports
pub use asset::*;
pub use asset_info::*;
pub use live_stream::*;
pub use playback_id::*;
pub use simulcast_target::*;
pub use track::*;
