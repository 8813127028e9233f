//! HTTP route handlers for the stub API.
//!
//! Every handler is an unconditional success path returning canned or
//! echoed data; the only validation is the type coercion axum performs
//! in its extractors.

use axum::extract::Query;
use axum::response::Json;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::api::{AnalysisAck, HealthStatus, OutcomeAck, SessionAck};
use crate::models::{PerformanceMetrics, TradeRecord};

use super::fixtures;

/// Health check endpoint.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        version: fixtures::API_VERSION.to_string(),
    })
}

/// Start a trading session. Accepts any JSON body and echoes it back
/// with a constant session id.
pub async fn start_session(Json(params): Json<Value>) -> Json<SessionAck> {
    debug!(?params, "start_session called");

    Json(SessionAck {
        status: "success".to_string(),
        session_id: fixtures::SESSION_ID.to_string(),
        params,
    })
}

#[derive(Debug, Deserialize)]
pub struct AddAnalysisParams {
    pub ticker: String,
}

/// Add an analysis result for a ticker.
pub async fn add_analysis(
    Query(params): Query<AddAnalysisParams>,
    Json(data): Json<Value>,
) -> Json<AnalysisAck> {
    debug!(ticker = %params.ticker, "add_analysis called");

    Json(AnalysisAck {
        id: fixtures::ANALYSIS_ID,
        ticker: params.ticker,
        status: "added".to_string(),
        data,
    })
}

#[derive(Debug, Deserialize)]
pub struct RecordOutcomeParams {
    pub analysis_id: i64,
    pub outcome: String,
    pub exit_price: Option<f64>,
    pub notes: Option<String>,
}

/// Record a trade outcome. Optional params are accepted and discarded.
pub async fn record_outcome(Query(params): Query<RecordOutcomeParams>) -> Json<OutcomeAck> {
    debug!(
        analysis_id = params.analysis_id,
        outcome = %params.outcome,
        exit_price = ?params.exit_price,
        "record_outcome called"
    );

    Json(OutcomeAck {
        success: true,
        analysis_id: params.analysis_id,
        outcome: params.outcome,
    })
}

/// Get the performance metrics literal.
pub async fn performance_metrics() -> Json<PerformanceMetrics> {
    Json(fixtures::performance_metrics())
}

#[derive(Debug, Deserialize)]
pub struct TradeHistoryParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    100
}

/// Get trade history. The stub always returns the same three records;
/// `limit` is parsed for wire compatibility but not applied.
pub async fn trade_history(Query(params): Query<TradeHistoryParams>) -> Json<Vec<TradeRecord>> {
    debug!(limit = params.limit, "trade_history called");

    Json(fixtures::trade_history())
}
