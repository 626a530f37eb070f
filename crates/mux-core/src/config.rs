//! Configuration module
//!
//! Credentials and transport settings for the Mux API client. Values come
//! either from code (`MuxConfig::new`) or from the environment
//! (`MuxConfig::from_env`), with a `.env` file loaded first when present.

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use anyhow::Context;

pub const DEFAULT_BASE_URL: &str = "https://api.mux.com";
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Clone)]
pub struct MuxConfig {
    pub base_url: String,
    pub token_id: String,
    pub token_secret: String,
    pub timeout_secs: u64,
}

impl MuxConfig {
    pub fn new(token_id: impl Into<String>, token_secret: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token_id: token_id.into(),
            token_secret: token_secret.into(),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Read MUX_TOKEN_ID and MUX_TOKEN_SECRET (required), MUX_BASE_URL and
    /// MUX_TIMEOUT_SECS (optional).
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let token_id = env::var("MUX_TOKEN_ID").context("MUX_TOKEN_ID must be set")?;
        let token_secret =
            env::var("MUX_TOKEN_SECRET").context("MUX_TOKEN_SECRET must be set")?;

        let mut config = Self::new(token_id, token_secret);

        if let Ok(base_url) = env::var("MUX_BASE_URL") {
            config = config.with_base_url(base_url);
        }

        if let Ok(timeout) = env::var("MUX_TIMEOUT_SECS") {
            let timeout_secs = timeout
                .parse()
                .map_err(|_| anyhow::anyhow!("MUX_TIMEOUT_SECS must be a valid number"))?;
            config = config.with_timeout_secs(timeout_secs);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.token_id.trim().is_empty() {
            return Err(anyhow::anyhow!("Mux token id cannot be empty"));
        }
        if self.token_secret.trim().is_empty() {
            return Err(anyhow::anyhow!("Mux token secret cannot be empty"));
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(anyhow::anyhow!(
                "Mux base URL must start with http:// or https://, got {}",
                self.base_url
            ));
        }
        if self.timeout_secs == 0 {
            return Err(anyhow::anyhow!("Request timeout must be greater than zero"));
        }
        Ok(())
    }
}

impl Debug for MuxConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("MuxConfig")
            .field("base_url", &self.base_url)
            .field("token_id", &self.token_id)
            .field("token_secret", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
