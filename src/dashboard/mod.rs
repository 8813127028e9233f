//! Terminal dashboard over the stub trading API.
//!
//! Each view issues its own HTTP call and handles the result
//! explicitly: `Ok` renders the data, `Err` renders a static
//! placeholder. No fetch failure escapes a view.

pub mod equity;
pub mod views;

use anyhow::Result;
use std::time::Duration;
use tracing::debug;

use crate::api::ApiClient;

/// Limits mirror the original dashboard: the chart asks for more
/// history than the table.
const CHART_LIMIT: u32 = 100;
const TABLE_LIMIT: u32 = 50;

/// Dashboard client rendering all views against one API.
pub struct Dashboard {
    client: ApiClient,
}

impl Dashboard {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Connection status line from the health probe.
    pub async fn connection_view(&self) -> String {
        match self.client.health().await {
            Ok(health) => views::render_connection(&health),
            Err(e) => {
                debug!(error = %e, "Health check failed");
                views::DISCONNECTED_MSG.to_string()
            }
        }
    }

    /// Performance metrics view, or its placeholder on any fetch error.
    pub async fn metrics_view(&self) -> String {
        match self.client.performance_metrics().await {
            Ok(metrics) => views::render_metrics(&metrics),
            Err(e) => {
                debug!(error = %e, "Metrics fetch failed");
                format!("{}\n", views::NO_METRICS_MSG)
            }
        }
    }

    /// Equity curve view: fetch, sort chronologically, accumulate P&L.
    pub async fn chart_view(&self) -> String {
        match self.client.trade_history(Some(CHART_LIMIT)).await {
            Ok(trades) => views::render_equity_chart(&equity::equity_curve(&trades)),
            Err(e) => {
                debug!(error = %e, "Trade history fetch failed");
                format!("{}\n", views::NO_TRADE_DATA_MSG)
            }
        }
    }

    /// Trade history table view, rows in API order.
    pub async fn history_view(&self) -> String {
        match self.client.trade_history(Some(TABLE_LIMIT)).await {
            Ok(trades) => views::render_history_table(&trades),
            Err(e) => {
                debug!(error = %e, "Trade history fetch failed");
                format!("{}\n", views::NO_HISTORY_MSG)
            }
        }
    }

    /// Render the full dashboard: connection line plus all three tabs.
    pub async fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&self.connection_view().await);
        out.push_str("\n\n");
        out.push_str(&self.metrics_view().await);
        out.push('\n');
        out.push_str(&self.chart_view().await);
        out.push('\n');
        out.push_str(&self.history_view().await);

        out
    }

    /// Render once, or keep re-rendering every `refresh` seconds until
    /// Ctrl+C. Each tick is a full re-fetch of every view.
    pub async fn run(&self, refresh: Option<u64>) -> Result<()> {
        println!("{}", self.render().await);

        let Some(secs) = refresh else {
            return Ok(());
        };
        let interval = Duration::from_secs(secs.max(1));

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    println!("\nStopping dashboard...");
                    break;
                }
                _ = tokio::time::sleep(interval) => {
                    println!("{}", self.render().await);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Nothing listens on port 9; every fetch fails fast.
    fn dead_client() -> ApiClient {
        ApiClient::with_base_url("http://127.0.0.1:9".to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_all_views_fall_back_when_backend_unreachable() {
        let dashboard = Dashboard::new(dead_client());

        assert_eq!(dashboard.connection_view().await, views::DISCONNECTED_MSG);
        assert!(dashboard.metrics_view().await.contains(views::NO_METRICS_MSG));
        assert!(dashboard.chart_view().await.contains(views::NO_TRADE_DATA_MSG));
        assert!(dashboard.history_view().await.contains(views::NO_HISTORY_MSG));
    }

    #[tokio::test]
    async fn test_full_render_never_errors_on_dead_backend() {
        let dashboard = Dashboard::new(dead_client());
        let out = dashboard.render().await;

        assert!(out.contains(views::DISCONNECTED_MSG));
        assert!(out.contains(views::NO_METRICS_MSG));
    }

    #[tokio::test]
    async fn test_render_against_live_stub() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, crate::server::build_router())
                .await
                .unwrap();
        });

        let client = ApiClient::with_base_url(format!("http://{}", addr)).unwrap();
        let dashboard = Dashboard::new(client);
        let out = dashboard.render().await;

        assert!(out.contains("Connected to backend API (v3.0.0)"));
        assert!(out.contains("63.4%"));
        assert!(out.contains("+9.55"));
        assert!(out.contains("STOPPED_OUT"));
    }
}
