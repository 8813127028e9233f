//! Client for the stub trading API (health, metrics, history, session ops).

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::models::{PerformanceMetrics, TradeRecord};

use super::types::*;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for the connection check only. The dashboard probes
/// `/health` before rendering and should not hang on a dead backend.
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the stub API.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL.
    pub fn with_base_url(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Probe the health endpoint with a short timeout.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = format!("{}/health", self.base_url);

        debug!(url = %url, "Checking backend health");

        let response = self
            .client
            .get(&url)
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await
            .context("Failed to reach health endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Health check failed: {} - {}", status, body);
        }

        response
            .json()
            .await
            .context("Failed to parse health response")
    }

    /// Fetch the performance metrics summary.
    pub async fn performance_metrics(&self) -> Result<PerformanceMetrics> {
        let url = format!("{}/performance_metrics", self.base_url);

        debug!(url = %url, "Fetching performance metrics");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch performance metrics")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Metrics request failed: {} - {}", status, body);
        }

        response
            .json()
            .await
            .context("Failed to parse metrics response")
    }

    /// Fetch trade history. The stub ignores `limit`, but the client
    /// sends it so it stays wire-compatible with a real backend.
    pub async fn trade_history(&self, limit: Option<u32>) -> Result<Vec<TradeRecord>> {
        let mut url = format!("{}/trade_history", self.base_url);

        if let Some(l) = limit {
            url = format!("{}?limit={}", url, l);
        }

        debug!(url = %url, "Fetching trade history");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch trade history")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Trade history request failed: {} - {}", status, body);
        }

        response
            .json()
            .await
            .context("Failed to parse trade history response")
    }

    /// Start a trading session. The body is free-form JSON and comes
    /// back echoed in the acknowledgement.
    pub async fn start_session(&self, params: &Value) -> Result<SessionAck> {
        let url = format!("{}/start_session", self.base_url);

        debug!(url = %url, "Starting session");

        let response = self
            .client
            .post(&url)
            .json(params)
            .send()
            .await
            .context("Failed to start session")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Start session request failed: {} - {}", status, body);
        }

        response
            .json()
            .await
            .context("Failed to parse session response")
    }

    /// Submit an analysis result for a ticker.
    pub async fn add_analysis(&self, ticker: &str, data: &Value) -> Result<AnalysisAck> {
        let url = format!("{}/add_analysis", self.base_url);

        debug!(url = %url, ticker = %ticker, "Adding analysis");

        let response = self
            .client
            .post(&url)
            .query(&[("ticker", ticker)])
            .json(data)
            .send()
            .await
            .context("Failed to add analysis")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Add analysis request failed: {} - {}", status, body);
        }

        response
            .json()
            .await
            .context("Failed to parse analysis response")
    }

    /// Record the outcome of an analyzed trade.
    pub async fn record_outcome(
        &self,
        analysis_id: i64,
        outcome: &str,
        exit_price: Option<f64>,
        notes: Option<&str>,
    ) -> Result<OutcomeAck> {
        let url = format!("{}/record_outcome", self.base_url);

        let mut query: Vec<(&str, String)> = vec![
            ("analysis_id", analysis_id.to_string()),
            ("outcome", outcome.to_string()),
        ];
        if let Some(p) = exit_price {
            query.push(("exit_price", p.to_string()));
        }
        if let Some(n) = notes {
            query.push(("notes", n.to_string()));
        }

        debug!(url = %url, analysis_id = analysis_id, "Recording outcome");

        let response = self
            .client
            .post(&url)
            .query(&query)
            .send()
            .await
            .context("Failed to record outcome")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Record outcome request failed: {} - {}", status, body);
        }

        response
            .json()
            .await
            .context("Failed to parse outcome response")
    }
}
