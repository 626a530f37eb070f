//! Request parameter types.
//!
//! Optional members are left out of the JSON body when unset so the API
//! applies its own defaults.

use mux_core::models::{MasterAccess, Mp4Support, OverlaySettings, PlaybackPolicy};
use serde::Serialize;
use validator::Validate;

/// One input of a new asset.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Validate)]
pub struct AssetInput {
    #[validate(url(message = "Asset input url must be a valid URL"))]
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_settings: Option<OverlaySettings>,
}

impl AssetInput {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            overlay_settings: None,
        }
    }

    pub fn with_overlay(mut self, overlay: OverlaySettings) -> Self {
        self.overlay_settings = Some(overlay);
        self
    }
}

/// Body of `POST /video/v1/assets`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Validate)]
pub struct CreateAssetRequest {
    #[validate(length(min = 1, message = "Asset requires at least one input"))]
    #[validate(nested)]
    pub input: Vec<AssetInput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub playback_policy: Vec<PlaybackPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mp4_support: Option<Mp4Support>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_access: Option<MasterAccess>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passthrough: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalize_audio: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_title_encode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
}

impl CreateAssetRequest {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            input: vec![AssetInput::new(url)],
            ..Default::default()
        }
    }

    pub fn with_playback_policy(mut self, policy: PlaybackPolicy) -> Self {
        if !self.playback_policy.contains(&policy) {
            self.playback_policy.push(policy);
        }
        self
    }

    pub fn with_mp4_support(mut self, mp4_support: Mp4Support) -> Self {
        self.mp4_support = Some(mp4_support);
        self
    }

    pub fn with_master_access(mut self, master_access: MasterAccess) -> Self {
        self.master_access = Some(master_access);
        self
    }

    pub fn with_passthrough(mut self, passthrough: impl Into<String>) -> Self {
        self.passthrough = Some(passthrough.into());
        self
    }
}

/// Settings applied to assets recorded from a live stream.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct NewAssetSettings {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub playback_policy: Vec<PlaybackPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mp4_support: Option<Mp4Support>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passthrough: Option<String>,
}

/// Body of `POST /video/v1/live-streams`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Validate)]
pub struct CreateLiveStreamRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub playback_policy: Vec<PlaybackPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_asset_settings: Option<NewAssetSettings>,
    /// Seconds to wait for a reconnect before finalizing the recording.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(
        min = 0.0,
        max = 1800.0,
        message = "Reconnect window must be between 0 and 1800 seconds"
    ))]
    pub reconnect_window: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passthrough: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduced_latency: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[validate(nested)]
    pub simulcast_targets: Vec<CreateSimulcastTargetRequest>,
}

impl CreateLiveStreamRequest {
    pub fn new(policy: PlaybackPolicy) -> Self {
        Self {
            playback_policy: vec![policy],
            ..Default::default()
        }
    }

    pub fn with_new_asset_settings(mut self, settings: NewAssetSettings) -> Self {
        self.new_asset_settings = Some(settings);
        self
    }

    pub fn with_reconnect_window(mut self, seconds: f64) -> Self {
        self.reconnect_window = Some(seconds);
        self
    }

    pub fn with_simulcast_target(mut self, target: CreateSimulcastTargetRequest) -> Self {
        self.simulcast_targets.push(target);
        self
    }
}

/// Body of `POST /video/v1/live-streams/{id}/simulcast-targets`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Validate)]
pub struct CreateSimulcastTargetRequest {
    /// RTMP(S) ingest URL of the destination.
    #[validate(url(message = "Simulcast target url must be a valid URL"))]
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passthrough: Option<String>,
}

impl CreateSimulcastTargetRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_stream_key(mut self, stream_key: impl Into<String>) -> Self {
        self.stream_key = Some(stream_key.into());
        self
    }

    pub fn with_passthrough(mut self, passthrough: impl Into<String>) -> Self {
        self.passthrough = Some(passthrough.into());
        self
    }
}

/// Paging parameters for list operations, forwarded verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListParams {
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl ListParams {
    pub fn new(limit: u32, page: u32) -> Self {
        Self {
            limit: Some(limit),
            page: Some(page),
        }
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        query
    }
}
