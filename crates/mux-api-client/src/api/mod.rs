//! Domain methods for the Mux API client.
//!
//! One method per vendor endpoint, grouped by resource. Each builds its path
//! and parameters, calls one generic helper on [`ApiClient`](crate::ApiClient),
//! and returns the normalized record.

mod assets;
mod live_streams;

use crate::{MuxError, API_PREFIX};

/// Percent-encode a caller-supplied path segment, rejecting empty ids.
pub(crate) fn segment(kind: &str, id: &str) -> Result<String, MuxError> {
    if id.trim().is_empty() {
        return Err(MuxError::InvalidInput(format!("{} cannot be empty", kind)));
    }
    Ok(urlencoding::encode(id).into_owned())
}

pub(crate) fn assets_path() -> String {
    format!("{}/assets", API_PREFIX)
}

pub(crate) fn asset_path(asset_id: &str) -> Result<String, MuxError> {
    Ok(format!("{}/{}", assets_path(), segment("asset id", asset_id)?))
}

pub(crate) fn live_streams_path() -> String {
    format!("{}/live-streams", API_PREFIX)
}

pub(crate) fn live_stream_path(live_stream_id: &str) -> Result<String, MuxError> {
    Ok(format!(
        "{}/{}",
        live_streams_path(),
        segment("live stream id", live_stream_id)?
    ))
}
