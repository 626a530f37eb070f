use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::normalize::{Field, Normalizable, ScalarKind, Schema};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrackType {
    Video,
    Audio,
    Text,
    Image,
}

impl TrackType {
    pub const VALUES: &'static [&'static str] = &["video", "audio", "text", "image"];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackType::Video => "video",
            TrackType::Audio => "audio",
            TrackType::Text => "text",
            TrackType::Image => "image",
        }
    }
}

impl Display for TrackType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// One media stream of an asset or of an input file.
///
/// Asset tracks report the `max_*` figures; input-info tracks report the
/// plain `width`/`height`/`frame_rate`/`channels` ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Track {
    pub id: String,
    #[serde(rename = "type")]
    pub track_type: Option<TrackType>,
    pub duration: Option<f64>,
    pub max_width: Option<i64>,
    pub max_height: Option<i64>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub max_frame_rate: Option<f64>,
    pub frame_rate: Option<f64>,
    pub max_channels: Option<i64>,
    pub channels: Option<i64>,
    pub max_channel_layout: Option<String>,
    pub sample_rate: Option<i64>,
    pub sample_size: Option<i64>,
    pub encoding: Option<String>,
    pub text_type: Option<String>,
    pub language_code: Option<String>,
    pub name: Option<String>,
    pub passthrough: Option<String>,
}

impl Track {
    pub fn is_video(&self) -> bool {
        self.track_type == Some(TrackType::Video)
    }

    pub fn is_audio(&self) -> bool {
        self.track_type == Some(TrackType::Audio)
    }

    /// `(width, height)`, preferring the asset-level maxima.
    pub fn dimensions(&self) -> Option<(i64, i64)> {
        let width = self.max_width.or(self.width)?;
        let height = self.max_height.or(self.height)?;
        Some((width, height))
    }
}

impl Normalizable for Track {
    const SCHEMA: &'static Schema = &Schema {
        name: "Track",
        fields: &[
            Field::scalar("id", ScalarKind::String),
            Field::scalar("type", ScalarKind::OneOf(TrackType::VALUES)),
            Field::scalar("duration", ScalarKind::Float),
            Field::scalar("max_width", ScalarKind::Integer),
            Field::scalar("max_height", ScalarKind::Integer),
            Field::scalar("width", ScalarKind::Integer),
            Field::scalar("height", ScalarKind::Integer),
            Field::scalar("max_frame_rate", ScalarKind::Float),
            Field::scalar("frame_rate", ScalarKind::Float),
            Field::scalar("max_channels", ScalarKind::Integer),
            Field::scalar("channels", ScalarKind::Integer),
            Field::scalar("max_channel_layout", ScalarKind::String),
            Field::scalar("sample_rate", ScalarKind::Integer),
            Field::scalar("sample_size", ScalarKind::Integer),
            Field::scalar("encoding", ScalarKind::String),
            Field::scalar("text_type", ScalarKind::String),
            Field::scalar("language_code", ScalarKind::String),
            Field::scalar("name", ScalarKind::String),
            Field::scalar("passthrough", ScalarKind::String),
        ],
    };
}
