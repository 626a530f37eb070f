#![allow(dead_code)]

pub mod fixtures;

use mockito::{Server, ServerGuard};
use mux_api_client::ApiClient;
use mux_core::MuxConfig;
use tracing_subscriber::EnvFilter;

pub const TOKEN_ID: &str = "test-token-id";
pub const TOKEN_SECRET: &str = "test-token-secret";
/// `Basic base64("test-token-id:test-token-secret")`
pub const BASIC_AUTH: &str = "Basic dGVzdC10b2tlbi1pZDp0ZXN0LXRva2VuLXNlY3JldA==";

/// Mock Mux server plus a client pointed at it
pub struct TestApp {
    pub server: ServerGuard,
    pub client: ApiClient,
}

/// Setup a client against a fresh mock server
pub async fn setup_test_client() -> TestApp {
    init_tracing();

    let server = Server::new_async().await;
    let config = MuxConfig::new(TOKEN_ID, TOKEN_SECRET).with_base_url(server.url());
    let client = ApiClient::new(&config).expect("Failed to create API client");

    TestApp { server, client }
}

/// Initialize tracing for tests; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mux_api_client=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Wrap a record body in the `{"data": ...}` envelope.
pub fn envelope(data: serde_json::Value) -> String {
    serde_json::json!({ "data": data }).to_string()
}

/// Vendor error body.
pub fn error_body(error_type: &str, messages: &[&str]) -> String {
    serde_json::json!({
        "error": {
            "type": error_type,
            "messages": messages,
        }
    })
    .to_string()
}
