use mux_core::models::{Asset, AssetInfo, MasterAccess, Mp4Support, PlaybackId, PlaybackPolicy};
use serde_json::json;
use validator::Validate;

use super::{asset_path, assets_path, segment};
use crate::{ApiClient, CreateAssetRequest, ListParams, MuxError};

impl ApiClient {
    /// Create an asset from one or more input URLs.
    pub async fn create_asset(&self, request: &CreateAssetRequest) -> Result<Asset, MuxError> {
        request.validate()?;
        self.post_json(&assets_path(), request).await
    }

    /// List assets, most recent first.
    pub async fn list_assets(&self, params: &ListParams) -> Result<Vec<Asset>, MuxError> {
        self.get_list(&assets_path(), &params.to_query()).await
    }

    pub async fn get_asset(&self, asset_id: &str) -> Result<Asset, MuxError> {
        self.get(&asset_path(asset_id)?, &[]).await
    }

    pub async fn delete_asset(&self, asset_id: &str) -> Result<(), MuxError> {
        self.delete(&asset_path(asset_id)?).await
    }

    pub async fn update_mp4_support(
        &self,
        asset_id: &str,
        mp4_support: Mp4Support,
    ) -> Result<Asset, MuxError> {
        let path = format!("{}/mp4-support", asset_path(asset_id)?);
        self.put_json(&path, &json!({ "mp4_support": mp4_support }))
            .await
    }

    pub async fn update_master_access(
        &self,
        asset_id: &str,
        master_access: MasterAccess,
    ) -> Result<Asset, MuxError> {
        let path = format!("{}/master-access", asset_path(asset_id)?);
        self.put_json(&path, &json!({ "master_access": master_access }))
            .await
    }

    /// How Mux saw each input of the asset before processing.
    pub async fn get_asset_input_info(&self, asset_id: &str) -> Result<Vec<AssetInfo>, MuxError> {
        let path = format!("{}/input-info", asset_path(asset_id)?);
        self.get_list(&path, &[]).await
    }

    pub async fn create_asset_playback_id(
        &self,
        asset_id: &str,
        policy: PlaybackPolicy,
    ) -> Result<PlaybackId, MuxError> {
        let path = format!("{}/playback-ids", asset_path(asset_id)?);
        self.post_json(&path, &json!({ "policy": policy })).await
    }

    pub async fn get_asset_playback_id(
        &self,
        asset_id: &str,
        playback_id: &str,
    ) -> Result<PlaybackId, MuxError> {
        let path = format!(
            "{}/playback-ids/{}",
            asset_path(asset_id)?,
            segment("playback id", playback_id)?
        );
        self.get(&path, &[]).await
    }

    pub async fn delete_asset_playback_id(
        &self,
        asset_id: &str,
        playback_id: &str,
    ) -> Result<(), MuxError> {
        let path = format!(
            "{}/playback-ids/{}",
            asset_path(asset_id)?,
            segment("playback id", playback_id)?
        );
        self.delete(&path).await
    }
}
