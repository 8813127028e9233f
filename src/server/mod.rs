//! Stub API server.
//!
//! Serves the fixed trading-performance payloads over HTTP with
//! permissive CORS so any dashboard frontend can poll it.

mod fixtures;
pub mod handlers;

use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Stub server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Build the router with all stub routes and middleware.
pub fn build_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/performance_metrics", get(handlers::performance_metrics))
        .route("/trade_history", get(handlers::trade_history))
        .route("/start_session", post(handlers::start_session))
        .route("/add_analysis", post(handlers::add_analysis))
        .route("/record_outcome", post(handlers::record_outcome))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Run the stub server until Ctrl+C or SIGTERM.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let router = build_router();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Stub API listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Stub API shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use serde_json::json;

    /// Bind the router on an ephemeral port and return its base URL.
    async fn spawn_server() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, build_router()).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_client_round_trip_against_live_router() {
        let base_url = spawn_server().await;
        let client = ApiClient::with_base_url(base_url).unwrap();

        let health = client.health().await.unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, "3.0.0");

        let metrics = client.performance_metrics().await.unwrap();
        assert_eq!(metrics.total_trades, 82);

        let trades = client.trade_history(Some(1)).await.unwrap();
        assert_eq!(trades.len(), 3);

        let session = client
            .start_session(&json!({"mode": "paper"}))
            .await
            .unwrap();
        assert_eq!(session.session_id, "test_session_123");
        assert_eq!(session.params, json!({"mode": "paper"}));

        let analysis = client
            .add_analysis("AAPL", &json!({"signal": "long"}))
            .await
            .unwrap();
        assert_eq!(analysis.id, 1);
        assert_eq!(analysis.ticker, "AAPL");

        let outcome = client
            .record_outcome(7, "STOPPED_OUT", Some(98.2), Some("gapped down"))
            .await
            .unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.analysis_id, 7);
        assert_eq!(outcome.outcome, "STOPPED_OUT");
    }
}
