use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use screening_core::model::{ScreeningPayload, ScreeningResult};
use tracing::{debug, warn};
use url::Url;

use super::Scorer;
use crate::error::ScoringError;

pub const DEFAULT_SCORING_URL: &str = "http://127.0.0.1:3000/analyze";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoringConfig {
    pub endpoint: Url,
    pub timeout: Duration,
}

impl ScoringConfig {
    /// # Errors
    ///
    /// Returns `ScoringError::InvalidEndpoint` unless `endpoint` is an
    /// absolute http(s) URL.
    pub fn new(endpoint: &str) -> Result<Self, ScoringError> {
        let endpoint = Url::parse(endpoint.trim())
            .map_err(|err| ScoringError::InvalidEndpoint(format!("{endpoint}: {err}")))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ScoringError::InvalidEndpoint(endpoint.to_string()));
        }
        Ok(Self {
            endpoint,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// The local development endpoint.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches `new`.
    pub fn local_default() -> Result<Self, ScoringError> {
        Self::new(DEFAULT_SCORING_URL)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `SCREENING_SCORING_URL` and `SCREENING_SCORING_TIMEOUT_SECS`.
    ///
    /// Returns `Ok(None)` when no endpoint is set.
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::InvalidEndpoint` if the URL is set but invalid.
    pub fn from_env() -> Result<Option<Self>, ScoringError> {
        let Some(endpoint) = env::var("SCREENING_SCORING_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
        else {
            return Ok(None);
        };
        let mut config = Self::new(&endpoint)?;
        if let Some(secs) = env::var("SCREENING_SCORING_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        Ok(Some(config))
    }
}

/// Posts payloads to an HTTP scoring endpoint.
#[derive(Clone)]
pub struct RemoteScorer {
    client: Client,
    config: ScoringConfig,
}

impl RemoteScorer {
    /// # Errors
    ///
    /// Returns `ScoringError::Http` if the HTTP client cannot be built.
    pub fn new(config: ScoringConfig) -> Result<Self, ScoringError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }
}

#[async_trait]
impl Scorer for RemoteScorer {
    async fn score(&self, payload: &ScreeningPayload) -> Result<ScreeningResult, ScoringError> {
        debug!(endpoint = %self.config.endpoint, "posting screening payload");

        let response = self
            .client
            .post(self.config.endpoint.clone())
            .json(payload)
            .send()
            .await
            .inspect_err(|err| {
                warn!(endpoint = %self.config.endpoint, "scoring request failed: {err}");
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %self.config.endpoint, %status, "scoring endpoint rejected payload");
            return Err(ScoringError::HttpStatus(status));
        }

        let body = response.bytes().await?;
        let value: serde_json::Value = serde_json::from_slice(&body)
            .inspect_err(|err| warn!("scoring response is not JSON: {err}"))?;

        debug!(%status, "scoring response received");
        Ok(ScreeningResult::new(value))
    }
}
