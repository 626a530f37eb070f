//! Response bodies shaped like the ones Mux returns.

use serde_json::{json, Value};

pub const ASSET_ID: &str = "01itgOBvgjAbES7Inwvu4kEBtsQ44HFL6";
pub const LIVE_STREAM_ID: &str = "QrikEQpEXp3RvklQSHyHSYOakQkXlRId";
pub const PLAYBACK_ID: &str = "OfjbrfeYdz01n7fMd00ti00Vmk101o014UPoX";
pub const SIMULCAST_TARGET_ID: &str = "vuOfW021mz5QA500wYEQ9SeUYvuYnpFz011mqSvski5T8WAq0Ff6cqOlQ";

pub fn asset() -> Value {
    json!({
        "id": ASSET_ID,
        "created_at": "1615000000",
        "status": "ready",
        "duration": 23.857167,
        "max_stored_resolution": "HD",
        "max_stored_frame_rate": 24,
        "aspect_ratio": "12:5",
        "mp4_support": "none",
        "master_access": "none",
        "playback_ids": [
            {"id": PLAYBACK_ID, "policy": "public"}
        ],
        "tracks": [
            {
                "id": "ck6eHdlqAUq01Xd5XFN302UgSbvBxLXpMvVvBSyh01vzoQ",
                "type": "video",
                "duration": 23.8238,
                "max_width": 1920,
                "max_height": 800,
                "max_frame_rate": 24
            },
            {
                "id": "J7PGXWGnC1jZPvq9k74UvHa5mXAiIKaHDXSg4OIyRHw",
                "type": "audio",
                "duration": 23.823792,
                "max_channels": 2,
                "max_channel_layout": "stereo"
            }
        ]
    })
}

pub fn preparing_asset() -> Value {
    json!({
        "id": ASSET_ID,
        "created_at": "1615000000",
        "status": "preparing",
        "mp4_support": "standard",
        "master_access": "temporary",
        "playback_ids": [
            {"id": PLAYBACK_ID, "policy": "public"}
        ]
    })
}

pub fn input_info() -> Value {
    json!([
        {
            "settings": {
                "url": "https://storage.googleapis.com/muxdemofiles/mux-video-intro.mp4"
            },
            "file": {
                "container_format": "mov,mp4,m4a,3gp,3g2,mj2",
                "tracks": [
                    {"type": "video", "duration": 23.8238, "encoding": "h264", "width": 1920, "height": 800, "frame_rate": 24},
                    {"type": "audio", "duration": 23.823792, "encoding": "aac", "channels": 2, "sample_rate": 48000, "sample_size": 16}
                ]
            }
        }
    ])
}

pub fn playback_id(policy: &str) -> Value {
    json!({"id": PLAYBACK_ID, "policy": policy})
}

pub fn live_stream() -> Value {
    json!({
        "id": LIVE_STREAM_ID,
        "created_at": "1616000000",
        "status": "idle",
        "stream_key": "5bd28537-7491-7ffa-050b-bbb506401234",
        "reconnect_window": 60,
        "playback_ids": [
            {"id": PLAYBACK_ID, "policy": "public"}
        ],
        "new_asset_settings": {"playback_policies": ["public"]},
        "recent_asset_ids": ["asset-1", "asset-2"],
        "simulcast_targets": []
    })
}

pub fn live_stream_with(id: &str, status: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "created_at": created_at,
        "status": status,
        "stream_key": format!("key-{}", id)
    })
}

pub fn simulcast_target() -> Value {
    json!({
        "id": SIMULCAST_TARGET_ID,
        "url": "rtmp://live.example.com/app",
        "stream_key": "abcdefgh",
        "passthrough": "Example",
        "status": "idle"
    })
}
