//! HTTP client for the Mux Video API.
//!
//! Provides an authenticated client (HTTP basic auth with an access token id
//! and secret), generic request helpers that unwrap the `{"data": ...}`
//! envelope and normalize it into `mux_core` records, and one method per
//! vendor endpoint (assets, live streams, playback IDs, simulcast targets).
//!
//! Every operation issues exactly one request. There are no retries; a
//! failure comes back as a [`MuxError`] carrying whatever the vendor reported.

pub mod api;
pub mod error;
pub mod requests;

use anyhow::Context;
use mux_core::{normalize, normalize_many, MuxConfig, Normalizable, NormalizeError};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

pub use error::{ApiError, MuxError};
pub use requests::{
    AssetInput, CreateAssetRequest, CreateLiveStreamRequest, CreateSimulcastTargetRequest,
    ListParams, NewAssetSettings,
};

/// Path prefix of the video API.
pub const API_PREFIX: &str = "/video/v1";

/// Access token pair sent as HTTP basic auth.
#[derive(Clone)]
pub struct Credentials {
    token_id: String,
    token_secret: String,
}

impl Credentials {
    pub fn new(token_id: impl Into<String>, token_secret: impl Into<String>) -> Self {
        Self {
            token_id: token_id.into(),
            token_secret: token_secret.into(),
        }
    }

    pub fn token_id(&self) -> &str {
        &self.token_id
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Credentials")
            .field("token_id", &self.token_id)
            .field("token_secret", &"<redacted>")
            .finish()
    }
}

/// Authenticated handle for the Mux API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl ApiClient {
    pub fn new(config: &MuxConfig) -> Result<Self, MuxError> {
        config
            .validate()
            .map_err(|e| MuxError::InvalidInput(e.to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials: Credentials::new(&config.token_id, &config.token_secret),
        })
    }

    /// Create client from environment: MUX_TOKEN_ID, MUX_TOKEN_SECRET, and
    /// optionally MUX_BASE_URL and MUX_TIMEOUT_SECS.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = MuxConfig::from_env().context("Failed to load Mux configuration")?;
        Self::new(&config).context("Failed to create HTTP client")
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(
            &self.credentials.token_id,
            Some(&self.credentials.token_secret),
        )
    }

    /// Send one request and return the raw body of a successful response.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Vec<u8>, MuxError> {
        let url = self.build_url(path);
        let mut request = self.apply_auth(self.client.request(method.clone(), &url));

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        tracing::debug!(method = %method, path, "Sending Mux API request");

        let response = request
            .send()
            .await
            .map_err(|e| log_error(&method, path, MuxError::Transport(e)))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| log_error(&method, path, MuxError::Transport(e)))?;

        if !status.is_success() {
            let error = ApiError::from_body(status.as_u16(), &bytes);
            return Err(log_error(&method, path, MuxError::Api(error)));
        }

        Ok(bytes.to_vec())
    }

    /// Send one request and decode its JSON body, or `None` when the
    /// response has no body.
    async fn send_json(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Option<Value>, MuxError> {
        let bytes = self.send(method, path, query, body).await?;
        Ok(decode_body(&bytes)?)
    }

    /// GET a single record.
    pub async fn get<T: Normalizable>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, MuxError> {
        let body = self.send_json(Method::GET, path, query, None).await?;
        Ok(normalize(&extract_data(body)?)?)
    }

    /// GET a list of records. Paging parameters are forwarded as given.
    pub async fn get_list<T: Normalizable>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, MuxError> {
        let body = self.send_json(Method::GET, path, query, None).await?;
        Ok(normalize_many(&extract_data(body)?)?)
    }

    /// POST JSON body and normalize the returned record.
    pub async fn post_json<T: Normalizable, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, MuxError> {
        let body = serde_json::to_value(body)?;
        let response = self.send_json(Method::POST, path, &[], Some(body)).await?;
        Ok(normalize(&extract_data(response)?)?)
    }

    /// POST without a body and normalize the returned record.
    pub async fn post_empty<T: Normalizable>(&self, path: &str) -> Result<T, MuxError> {
        let response = self.send_json(Method::POST, path, &[], None).await?;
        Ok(normalize(&extract_data(response)?)?)
    }

    /// PUT JSON body and normalize the returned record.
    pub async fn put_json<T: Normalizable, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, MuxError> {
        let body = serde_json::to_value(body)?;
        let response = self.send_json(Method::PUT, path, &[], Some(body)).await?;
        Ok(normalize(&extract_data(response)?)?)
    }

    /// PUT without a body. Whatever the API returns on success is discarded
    /// undecoded.
    pub async fn put_empty(&self, path: &str) -> Result<(), MuxError> {
        self.send(Method::PUT, path, &[], None).await?;
        Ok(())
    }

    /// DELETE request. Returns Ok(()) on success; the body is not decoded.
    pub async fn delete(&self, path: &str) -> Result<(), MuxError> {
        self.send(Method::DELETE, path, &[], None).await?;
        Ok(())
    }
}

/// Log a failed request at the level its metadata asks for and hand the
/// error back.
fn log_error(method: &Method, path: &str, error: MuxError) -> MuxError {
    let code = error.error_code();
    let status = error.status_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(method = %method, path, ?status, code, error = %error, "Mux API request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(method = %method, path, ?status, code, error = %error, "Mux API request failed");
        }
        LogLevel::Error => {
            tracing::error!(method = %method, path, ?status, code, error = %error, "Mux API request failed");
        }
    }
    error
}

/// Decode a success body; blank bodies decode to `None`.
fn decode_body(bytes: &[u8]) -> Result<Option<Value>, NormalizeError> {
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(None);
    }

    serde_json::from_slice(bytes)
        .map(Some)
        .map_err(|e| NormalizeError::ShapeMismatch {
            path: "response".to_string(),
            expected: "JSON body".to_string(),
            found: e.to_string(),
        })
}

/// Pull the `data` member out of a success envelope.
fn extract_data(body: Option<Value>) -> Result<Value, NormalizeError> {
    let missing = |found: &str| NormalizeError::ShapeMismatch {
        path: "response".to_string(),
        expected: "object with a data member".to_string(),
        found: found.to_string(),
    };

    match body {
        Some(Value::Object(mut envelope)) => envelope
            .remove("data")
            .ok_or_else(|| missing("object without a data member")),
        Some(other) => Err(NormalizeError::shape_mismatch(
            "response",
            "object with a data member",
            &other,
        )),
        None => Err(missing("empty body")),
    }
}

// Re-export the record types so callers only need this crate.
pub use mux_core::models;
pub use mux_core::{ErrorMetadata, LogLevel, Normalized};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_data() {
        let data = extract_data(Some(json!({"data": {"id": "a1"}}))).unwrap();
        assert_eq!(data, json!({"id": "a1"}));

        let data = extract_data(Some(json!({"data": [1, 2]}))).unwrap();
        assert_eq!(data, json!([1, 2]));
    }

    #[test]
    fn test_extract_data_rejects_missing_envelope() {
        let err = extract_data(Some(json!({"id": "a1"}))).unwrap_err();
        assert!(err.is_shape_mismatch());
        assert_eq!(err.path(), "response");

        let err = extract_data(Some(json!([{"id": "a1"}]))).unwrap_err();
        assert!(err.is_shape_mismatch());

        let err = extract_data(None).unwrap_err();
        assert!(err.to_string().contains("empty body"));
    }

    #[test]
    fn test_client_trims_base_url_and_redacts_secret() {
        let config = MuxConfig::new("id-1", "secret-1").with_base_url("http://localhost:9000/");
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
        assert_eq!(
            client.build_url("/video/v1/assets"),
            "http://localhost:9000/video/v1/assets"
        );
        assert_eq!(client.credentials().token_id(), "id-1");

        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret-1"));
    }

    #[test]
    fn test_decode_body() {
        assert_eq!(decode_body(b"").unwrap(), None);
        assert_eq!(decode_body(b" \n").unwrap(), None);
        assert_eq!(
            decode_body(br#"{"data": {}}"#).unwrap(),
            Some(json!({"data": {}}))
        );

        let err = decode_body(b"OK").unwrap_err();
        assert!(err.is_shape_mismatch());
        assert_eq!(err.path(), "response");
    }

    #[test]
    fn test_log_error_returns_error_unchanged() {
        let err = log_error(
            &Method::GET,
            "/video/v1/assets/missing",
            MuxError::Api(ApiError::from_body(404, b"")),
        );
        assert!(err.is_not_found());
        assert_eq!(err.log_level(), LogLevel::Debug);

        let err = log_error(
            &Method::DELETE,
            "/video/v1/assets/a1",
            MuxError::Api(ApiError::from_body(503, b"")),
        );
        assert_eq!(err.api_error().map(|e| e.status), Some(503));
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let err = ApiClient::new(&MuxConfig::new("", "secret")).unwrap_err();
        assert!(matches!(err, MuxError::InvalidInput(_)));

        let config = MuxConfig::new("id", "secret").with_base_url("ftp://example.com");
        assert!(ApiClient::new(&config).is_err());
    }
}
