use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt::{Display, Formatter, Result as FmtResult};

use super::playback_id::PlaybackId;
use super::simulcast_target::SimulcastTarget;
use crate::normalize::{Field, Normalizable, ScalarKind, Schema};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LiveStreamStatus {
    Idle,
    Active,
    Disabled,
}

impl LiveStreamStatus {
    pub const VALUES: &'static [&'static str] = &["idle", "active", "disabled"];
}

impl Display for LiveStreamStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LiveStreamStatus::Idle => write!(f, "idle"),
            LiveStreamStatus::Active => write!(f, "active"),
            LiveStreamStatus::Disabled => write!(f, "disabled"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LiveStream {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub status: Option<LiveStreamStatus>,
    pub stream_key: Option<String>,
    /// Seconds the stream may stay disconnected before the asset is finalized.
    pub reconnect_window: Option<f64>,
    pub playback_ids: Vec<PlaybackId>,
    pub recent_asset_ids: Vec<String>,
    pub active_asset_id: Option<String>,
    pub simulcast_targets: Vec<SimulcastTarget>,
    pub new_asset_settings: Option<JsonValue>,
    pub passthrough: Option<String>,
    pub reduced_latency: Option<bool>,
    pub test: Option<bool>,
    pub max_continuous_duration: Option<i64>,
}

impl LiveStream {
    pub fn is_active(&self) -> bool {
        self.status == Some(LiveStreamStatus::Active)
    }
}

impl Normalizable for LiveStream {
    const SCHEMA: &'static Schema = &Schema {
        name: "LiveStream",
        fields: &[
            Field::scalar("id", ScalarKind::String),
            Field::scalar("created_at", ScalarKind::Epoch),
            Field::scalar("status", ScalarKind::OneOf(LiveStreamStatus::VALUES)),
            Field::scalar("stream_key", ScalarKind::String),
            Field::scalar("reconnect_window", ScalarKind::Float),
            Field::many("playback_ids", PlaybackId::SCHEMA),
            Field::scalar("recent_asset_ids", ScalarKind::StringList),
            Field::scalar("active_asset_id", ScalarKind::String),
            Field::many("simulcast_targets", SimulcastTarget::SCHEMA),
            Field::scalar("new_asset_settings", ScalarKind::Json),
            Field::scalar("passthrough", ScalarKind::String),
            Field::scalar("reduced_latency", ScalarKind::Boolean),
            Field::scalar("test", ScalarKind::Boolean),
            Field::scalar("max_continuous_duration", ScalarKind::Integer),
        ],
    };
}
