use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt::{Display, Formatter, Result as FmtResult};

use super::playback_id::PlaybackId;
use super::track::Track;
use crate::normalize::{Field, Normalizable, ScalarKind, Schema};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Preparing,
    Ready,
    Errored,
}

impl AssetStatus {
    pub const VALUES: &'static [&'static str] = &["preparing", "ready", "errored"];
}

impl Display for AssetStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AssetStatus::Preparing => write!(f, "preparing"),
            AssetStatus::Ready => write!(f, "ready"),
            AssetStatus::Errored => write!(f, "errored"),
        }
    }
}

/// Whether downloadable MP4 renditions are generated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Mp4Support {
    #[serde(rename = "none")]
    Disabled,
    #[serde(rename = "standard")]
    Standard,
}

impl Mp4Support {
    pub const VALUES: &'static [&'static str] = &["none", "standard"];
}

/// Whether a temporary download of the master file is available.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MasterAccess {
    #[serde(rename = "none")]
    Disabled,
    #[serde(rename = "temporary")]
    Temporary,
}

impl MasterAccess {
    pub const VALUES: &'static [&'static str] = &["none", "temporary"];
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Asset {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub status: Option<AssetStatus>,
    pub duration: Option<f64>,
    pub max_stored_resolution: Option<String>,
    pub max_stored_frame_rate: Option<f64>,
    pub aspect_ratio: Option<String>,
    pub playback_ids: Vec<PlaybackId>,
    pub tracks: Vec<Track>,
    pub mp4_support: Option<Mp4Support>,
    pub master_access: Option<MasterAccess>,
    pub passthrough: Option<String>,
    pub live_stream_id: Option<String>,
    pub is_live: Option<bool>,
    pub per_title_encode: Option<bool>,
    pub normalize_audio: Option<bool>,
    pub test: Option<bool>,
    pub upload_id: Option<String>,
    pub source_asset_id: Option<String>,
    pub errors: Option<JsonValue>,
    pub master: Option<JsonValue>,
    pub static_renditions: Option<JsonValue>,
}

impl Asset {
    pub fn is_ready(&self) -> bool {
        self.status == Some(AssetStatus::Ready)
    }

    /// First playback ID with a public policy, if any.
    pub fn public_playback_id(&self) -> Option<&PlaybackId> {
        self.playback_ids.iter().find(|p| p.is_public())
    }
}

impl Normalizable for Asset {
    const SCHEMA: &'static Schema = &Schema {
        name: "Asset",
        fields: &[
            Field::scalar("id", ScalarKind::String),
            Field::scalar("created_at", ScalarKind::Epoch),
            Field::scalar("status", ScalarKind::OneOf(AssetStatus::VALUES)),
            Field::scalar("duration", ScalarKind::Float),
            Field::scalar("max_stored_resolution", ScalarKind::String),
            Field::scalar("max_stored_frame_rate", ScalarKind::Float),
            Field::scalar("aspect_ratio", ScalarKind::String),
            Field::many("playback_ids", PlaybackId::SCHEMA),
            Field::many("tracks", Track::SCHEMA),
            Field::scalar("mp4_support", ScalarKind::OneOf(Mp4Support::VALUES)),
            Field::scalar("master_access", ScalarKind::OneOf(MasterAccess::VALUES)),
            Field::scalar("passthrough", ScalarKind::String),
            Field::scalar("live_stream_id", ScalarKind::String),
            Field::scalar("is_live", ScalarKind::Boolean),
            Field::scalar("per_title_encode", ScalarKind::Boolean),
            Field::scalar("normalize_audio", ScalarKind::Boolean),
            Field::scalar("test", ScalarKind::Boolean),
            Field::scalar("upload_id", ScalarKind::String),
            Field::scalar("source_asset_id", ScalarKind::String),
            Field::scalar("errors", ScalarKind::Json),
            Field::scalar("master", ScalarKind::Json),
            Field::scalar("static_renditions", ScalarKind::Json),
        ],
    };
}
