use mux_core::models::{LiveStream, PlaybackId, PlaybackPolicy, SimulcastTarget};
use serde_json::json;
use validator::Validate;

use super::{live_stream_path, live_streams_path, segment};
use crate::{ApiClient, CreateLiveStreamRequest, CreateSimulcastTargetRequest, ListParams, MuxError};

impl ApiClient {
    pub async fn create_live_stream(
        &self,
        request: &CreateLiveStreamRequest,
    ) -> Result<LiveStream, MuxError> {
        request.validate()?;
        self.post_json(&live_streams_path(), request).await
    }

    pub async fn list_live_streams(&self, params: &ListParams) -> Result<Vec<LiveStream>, MuxError> {
        self.get_list(&live_streams_path(), &params.to_query())
            .await
    }

    pub async fn get_live_stream(&self, live_stream_id: &str) -> Result<LiveStream, MuxError> {
        self.get(&live_stream_path(live_stream_id)?, &[]).await
    }

    pub async fn delete_live_stream(&self, live_stream_id: &str) -> Result<(), MuxError> {
        self.delete(&live_stream_path(live_stream_id)?).await
    }

    /// Allow the stream to accept connections again.
    pub async fn enable_live_stream(&self, live_stream_id: &str) -> Result<(), MuxError> {
        let path = format!("{}/enable", live_stream_path(live_stream_id)?);
        self.put_empty(&path).await
    }

    /// Reject new connections and end the current broadcast.
    pub async fn disable_live_stream(&self, live_stream_id: &str) -> Result<(), MuxError> {
        let path = format!("{}/disable", live_stream_path(live_stream_id)?);
        self.put_empty(&path).await
    }

    /// Finish the active asset now instead of waiting out the reconnect window.
    pub async fn signal_live_stream_complete(&self, live_stream_id: &str) -> Result<(), MuxError> {
        let path = format!("{}/complete", live_stream_path(live_stream_id)?);
        self.put_empty(&path).await
    }

    /// Issue a new stream key; the old key stops working immediately.
    pub async fn reset_stream_key(&self, live_stream_id: &str) -> Result<LiveStream, MuxError> {
        let path = format!("{}/reset-stream-key", live_stream_path(live_stream_id)?);
        self.post_empty(&path).await
    }

    pub async fn create_live_stream_playback_id(
        &self,
        live_stream_id: &str,
        policy: PlaybackPolicy,
    ) -> Result<PlaybackId, MuxError> {
        let path = format!("{}/playback-ids", live_stream_path(live_stream_id)?);
        self.post_json(&path, &json!({ "policy": policy })).await
    }

    pub async fn get_live_stream_playback_id(
        &self,
        live_stream_id: &str,
        playback_id: &str,
    ) -> Result<PlaybackId, MuxError> {
        let path = format!(
            "{}/playback-ids/{}",
            live_stream_path(live_stream_id)?,
            segment("playback id", playback_id)?
        );
        self.get(&path, &[]).await
    }

    pub async fn delete_live_stream_playback_id(
        &self,
        live_stream_id: &str,
        playback_id: &str,
    ) -> Result<(), MuxError> {
        let path = format!(
            "{}/playback-ids/{}",
            live_stream_path(live_stream_id)?,
            segment("playback id", playback_id)?
        );
        self.delete(&path).await
    }

    pub async fn create_simulcast_target(
        &self,
        live_stream_id: &str,
        request: &CreateSimulcastTargetRequest,
    ) -> Result<SimulcastTarget, MuxError> {
        request.validate()?;
        let path = format!("{}/simulcast-targets", live_stream_path(live_stream_id)?);
        self.post_json(&path, request).await
    }

    pub async fn get_simulcast_target(
        &self,
        live_stream_id: &str,
        simulcast_target_id: &str,
    ) -> Result<SimulcastTarget, MuxError> {
        let path = format!(
            "{}/simulcast-targets/{}",
            live_stream_path(live_stream_id)?,
            segment("simulcast target id", simulcast_target_id)?
        );
        self.get(&path, &[]).await
    }

    pub async fn delete_simulcast_target(
        &self,
        live_stream_id: &str,
        simulcast_target_id: &str,
    ) -> Result<(), MuxError> {
        let path = format!(
            "{}/simulcast-targets/{}",
            live_stream_path(live_stream_id)?,
            segment("simulcast target id", simulcast_target_id)?
        );
        self.delete(&path).await
    }
}
