//! The fetch primitive every provider goes through. The name resembles the
//! Unix cURL tool. Keeping this behind a trait lets tests substitute fixture
//! or failing implementations without touching the adapters.

use std::time::Duration;

use async_trait::async_trait;
use tracing::trace;

use crate::constants::USER_AGENT;
use crate::error::{Result, TranslateError};

/// Applied whenever a caller does not override the timeout. The providers we
/// scrape are not reliable enough to wait on for longer.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

#[async_trait]
pub trait Curler: Send + Sync {
    /// Issues a GET request to `url` with the default one second timeout.
    async fn get(&self, url: &str) -> Result<String> {
        self.get_with_timeout(url, DEFAULT_TIMEOUT_MS).await
    }

    /// Issues a GET request to `url`, bounded by `timeout_ms`. A timeout is
    /// reported as [`TranslateError::Timeout`], distinct from other network
    /// failures.
    async fn get_with_timeout(&self, url: &str, timeout_ms: u64) -> Result<String>;
}

/// Curler backed by a shared reqwest client.
pub struct ReqwestCurler {
    client: reqwest::Client,
    default_timeout_ms: u64,
}

impl ReqwestCurler {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_MS)
    }

    /// A curler whose parameterless `get` uses the given timeout instead of
    /// the built-in one second.
    pub fn with_timeout(default_timeout_ms: u64) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            default_timeout_ms,
        }
    }
}

impl Default for ReqwestCurler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Curler for ReqwestCurler {
    async fn get(&self, url: &str) -> Result<String> {
        self.get_with_timeout(url, self.default_timeout_ms).await
    }

    async fn get_with_timeout(&self, url: &str, timeout_ms: u64) -> Result<String> {
        trace!("GET {url}");
        let response = self
            .client
            .get(url)
            .timeout(Duration::from_millis(timeout_ms))
            .send()
            .await
            .map_err(|e| classify(e, url, timeout_ms))?;
        let body = response
            .text()
            .await
            .map_err(|e| classify(e, url, timeout_ms))?;
        Ok(body)
    }
}

fn classify(error: reqwest::Error, url: &str, timeout_ms: u64) -> TranslateError {
    if error.is_timeout() {
        TranslateError::Timeout {
            url: url.to_string(),
            timeout_ms,
        }
    } else {
        TranslateError::Http(error)
    }
}
