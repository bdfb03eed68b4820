use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::UpstreamConfig;

/// Envelope every provider endpoint wraps its payload in. For lookups the
/// `response` field is either an object or a string describing a miss.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub response: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct StatsEnvelope {
    #[serde(default)]
    pub response: StatsPayload,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsPayload {
    #[serde(default)]
    pub daily: DailyStats,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyStats {
    #[serde(default)]
    pub callsign: Vec<StatsEntry>,
    #[serde(default)]
    pub aircraft: Vec<StatsEntry>,
    #[serde(default)]
    pub airline: Vec<StatsEntry>,
}

/// One popularity counter from the provider's daily stats. `url` points at
/// the lookup the counter is for.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsEntry {
    pub url: Option<String>,
    #[serde(default)]
    pub count: i64,
}

/// Read-only client for the flight-data provider.
///
/// All four operations are single GETs bounded by the configured timeout.
/// No retries, no client-side caching.
#[async_trait]
pub trait FlightDataClient: Send + Sync {
    async fn stats(&self) -> anyhow::Result<StatsPayload>;
    async fn callsign(&self, query: &str) -> anyhow::Result<serde_json::Value>;
    async fn aircraft(&self, query: &str) -> anyhow::Result<serde_json::Value>;
    async fn airline(&self, query: &str) -> anyhow::Result<serde_json::Value>;
}

/// adsbdb.com REST client.
pub struct AdsbdbClient {
    client: Client,
    base_url: String,
}

impl AdsbdbClient {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn lookup(&self, kind: &str, query: &str) -> anyhow::Result<serde_json::Value> {
        let url = format!("{}/{}/{}", self.base_url, kind, urlencoding::encode(query));
        debug!(%url, "upstream lookup");
        let envelope: ApiEnvelope = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(envelope.response)
    }
}

#[async_trait]
impl FlightDataClient for AdsbdbClient {
    async fn stats(&self) -> anyhow::Result<StatsPayload> {
        let url = format!("{}/stats", self.base_url);
        debug!(%url, "upstream stats");
        let envelope: StatsEnvelope = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(envelope.response)
    }

    async fn callsign(&self, query: &str) -> anyhow::Result<serde_json::Value> {
        self.lookup("callsign", query).await
    }

    async fn aircraft(&self, query: &str) -> anyhow::Result<serde_json::Value> {
        self.lookup("aircraft", query).await
    }

    async fn airline(&self, query: &str) -> anyhow::Result<serde_json::Value> {
        self.lookup("airline", query).await
    }
}
