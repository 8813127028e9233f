//! Request and response payloads for the stub API endpoints.
//!
//! These types are shared between the axum handlers (which serialize
//! them) and `ApiClient` (which deserializes them), so the wire format
//! only exists in one place.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response from `/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Acknowledgement from `/start_session`: the session id is a fixed
/// constant and the caller's params come back verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionAck {
    pub status: String,
    pub session_id: String,
    pub params: Value,
}

/// Acknowledgement from `/add_analysis`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisAck {
    pub id: i64,
    pub ticker: String,
    pub status: String,
    pub data: Value,
}

/// Acknowledgement from `/record_outcome`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeAck {
    pub success: bool,
    pub analysis_id: i64,
    pub outcome: String,
}
