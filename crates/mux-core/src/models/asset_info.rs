//! Input info: how Mux saw an asset's source before processing it.

use serde::{Deserialize, Serialize};

use super::track::Track;
use crate::normalize::{Field, Normalizable, ScalarKind, Schema};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssetInfo {
    pub file: Option<File>,
    pub settings: Option<Settings>,
}

/// Container-level description of an input file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct File {
    pub container_format: Option<String>,
    pub tracks: Vec<Track>,
}

/// The input settings the asset was created with.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub url: Option<String>,
    pub overlay_settings: Option<OverlaySettings>,
}

/// Watermark placement. Values are kept as the API renders them ("10%", "20px").
///
/// Also used as request input when creating an asset with an overlay.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OverlaySettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<String>,
}

impl Normalizable for AssetInfo {
    const SCHEMA: &'static Schema = &Schema {
        name: "AssetInfo",
        fields: &[
            Field::one("file", File::SCHEMA),
            Field::one("settings", Settings::SCHEMA),
        ],
    };
}

impl Normalizable for File {
    const SCHEMA: &'static Schema = &Schema {
        name: "File",
        fields: &[
            Field::scalar("container_format", ScalarKind::String),
            Field::many("tracks", Track::SCHEMA),
        ],
    };
}

impl Normalizable for Settings {
    const SCHEMA: &'static Schema = &Schema {
        name: "Settings",
        fields: &[
            Field::scalar("url", ScalarKind::String),
            Field::one("overlay_settings", OverlaySettings::SCHEMA),
        ],
    };
}

impl Normalizable for OverlaySettings {
    const SCHEMA: &'static Schema = &Schema {
        name: "OverlaySettings",
        fields: &[
            Field::scalar("vertical_align", ScalarKind::Display),
            Field::scalar("vertical_margin", ScalarKind::Display),
            Field::scalar("horizontal_align", ScalarKind::Display),
            Field::scalar("horizontal_margin", ScalarKind::Display),
            Field::scalar("width", ScalarKind::Display),
            Field::scalar("height", ScalarKind::Display),
            Field::scalar("opacity", ScalarKind::Display),
        ],
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrackType;
    use crate::normalize::{normalize, normalize_many};
    use serde_json::json;

    #[test]
    fn test_normalize_input_info() {
        let infos: Vec<AssetInfo> = normalize_many(&json!([
            {
                "settings": {
                    "url": "https://example.com/video.mp4",
                    "overlay_settings": {
                        "vertical_align": "top",
                        "vertical_margin": "10%",
                        "horizontal_align": "right",
                        "horizontal_margin": "5%",
                        "width": "25%",
                        "opacity": 0.9
                    }
                },
                "file": {
                    "container_format": "mov,mp4,m4a,3gp,3g2,mj2",
                    "tracks": [
                        {"type": "video", "width": 1920, "height": 800, "frame_rate": 24, "encoding": "h264", "duration": 23.8238},
                        {"type": "audio", "channels": 2, "sample_rate": 48000, "sample_size": 16, "encoding": "aac"}
                    ]
                }
            }
        ]))
        .unwrap();

        assert_eq!(infos.len(), 1);
        let info = &infos[0];

        let settings = info.settings.as_ref().unwrap();
        assert_eq!(settings.url.as_deref(), Some("https://example.com/video.mp4"));
        let overlay = settings.overlay_settings.as_ref().unwrap();
        assert_eq!(overlay.vertical_margin.as_deref(), Some("10%"));
        assert_eq!(overlay.opacity.as_deref(), Some("0.9"));
        assert_eq!(overlay.height, None);

        let file = info.file.as_ref().unwrap();
        assert_eq!(file.container_format.as_deref(), Some("mov,mp4,m4a,3gp,3g2,mj2"));
        assert_eq!(file.tracks.len(), 2);
        assert_eq!(file.tracks[0].track_type, Some(TrackType::Video));
        assert_eq!(file.tracks[0].dimensions(), Some((1920, 800)));
        assert_eq!(file.tracks[1].sample_rate, Some(48000));
    }

    #[test]
    fn test_settings_without_overlay() {
        let info: AssetInfo = normalize(&json!({"settings": {"url": "https://example.com/a.mp4"}})).unwrap();
        assert!(info.file.is_none());
        assert!(info.settings.unwrap().overlay_settings.is_none());
    }

    #[test]
    fn test_embedded_one_expects_mapping() {
        let err = normalize::<AssetInfo>(&json!({"file": ["not", "an", "object"]})).unwrap_err();
        assert!(err.is_shape_mismatch());
        assert_eq!(err.path(), "AssetInfo.file");
    }

    #[test]
    fn test_overlay_rejects_boolean() {
        let err = normalize::<OverlaySettings>(&json!({"opacity": true})).unwrap_err();
        assert!(err.is_shape_mismatch());
        assert_eq!(err.path(), "OverlaySettings.opacity");
    }
}
