//! Trade record model matching the stub API wire format.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a trade was closed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutcomeStatus {
    HitTarget,
    HitSecondary,
    HitStop,
    StoppedOut,
    Expired,
}

impl OutcomeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeStatus::HitTarget => "HIT_TARGET",
            OutcomeStatus::HitSecondary => "HIT_SECONDARY",
            OutcomeStatus::HitStop => "HIT_STOP",
            OutcomeStatus::StoppedOut => "STOPPED_OUT",
            OutcomeStatus::Expired => "EXPIRED",
        }
    }
}

/// Individual closed trade as returned by `/trade_history`.
///
/// Records carry no identity beyond their position in the returned
/// list. Timestamps are timezone-naive (`2024-12-19T10:30:00`), which
/// is exactly what the wire format emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Ticker symbol the trade was taken on
    pub ticker: String,

    /// When the trade was closed
    pub timestamp: NaiveDateTime,

    /// Model confidence at entry (0-10 scale)
    pub confidence_score: f64,

    /// How the trade resolved
    pub outcome_status: OutcomeStatus,

    /// Realized P&L in account currency
    pub pnl: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> TradeRecord {
        TradeRecord {
            ticker: "AAPL".to_string(),
            timestamp: "2024-12-19T10:30:00".parse().unwrap(),
            confidence_score: 8.7,
            outcome_status: OutcomeStatus::HitTarget,
            pnl: dec!(5.0),
        }
    }

    #[test]
    fn test_serializes_wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["ticker"], "AAPL");
        assert_eq!(json["timestamp"], "2024-12-19T10:30:00");
        assert_eq!(json["confidence_score"], 8.7);
        assert_eq!(json["outcome_status"], "HIT_TARGET");
        assert_eq!(json["pnl"], 5.0);
    }

    #[test]
    fn test_outcome_status_round_trip() {
        for status in [
            OutcomeStatus::HitTarget,
            OutcomeStatus::HitSecondary,
            OutcomeStatus::HitStop,
            OutcomeStatus::StoppedOut,
            OutcomeStatus::Expired,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: OutcomeStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn test_deserializes_fixture_payload() {
        let json = r#"{"ticker": "AAPL", "timestamp": "2024-12-19T10:30:00",
            "confidence_score": 8.7, "outcome_status": "HIT_TARGET", "pnl": 5.0}"#;
        let trade: TradeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(trade, sample());
    }
}
