use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::normalize::{Field, Normalizable, ScalarKind, Schema};

const STREAM_BASE_URL: &str = "https://stream.mux.com";
const IMAGE_BASE_URL: &str = "https://image.mux.com";

/// Visibility of a playback ID. Shared by every operation that accepts a policy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackPolicy {
    Public,
    Signed,
}

impl PlaybackPolicy {
    pub const VALUES: &'static [&'static str] = &["public", "signed"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlaybackPolicy::Public => "public",
            PlaybackPolicy::Signed => "signed",
        }
    }
}

impl Display for PlaybackPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlaybackId {
    pub id: String,
    pub policy: Option<PlaybackPolicy>,
}

impl PlaybackId {
    /// HLS manifest URL for this playback ID. Signed IDs still need a token.
    pub fn stream_url(&self) -> String {
        format!("{}/{}.m3u8", STREAM_BASE_URL, self.id)
    }

    pub fn thumbnail_url(&self) -> String {
        format!("{}/{}/thumbnail.jpg", IMAGE_BASE_URL, self.id)
    }

    pub fn is_public(&self) -> bool {
        self.policy == Some(PlaybackPolicy::Public)
    }
}

impl Normalizable for PlaybackId {
    const SCHEMA: &'static Schema = &Schema {
        name: "PlaybackId",
        fields: &[
            Field::scalar("id", ScalarKind::String),
            Field::scalar("policy", ScalarKind::OneOf(PlaybackPolicy::VALUES)),
        ],
    };
}
