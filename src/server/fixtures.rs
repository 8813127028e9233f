//! Canned responses served by the stub API.
//!
//! Every endpoint returns these literals regardless of input, so the
//! dashboard can be developed and tested without a live backend.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::models::{OutcomeStatus, PerformanceMetrics, TradeRecord};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SESSION_ID: &str = "test_session_123";
pub const ANALYSIS_ID: i64 = 1;

/// The fixed three-record trade history.
pub fn trade_history() -> Vec<TradeRecord> {
    let day = NaiveDate::from_ymd_opt(2024, 12, 19).expect("valid fixture date");

    vec![
        TradeRecord {
            ticker: "AAPL".to_string(),
            timestamp: day.and_hms_opt(10, 30, 0).expect("valid fixture time"),
            confidence_score: 8.7,
            outcome_status: OutcomeStatus::HitTarget,
            pnl: dec!(5.0),
        },
        TradeRecord {
            ticker: "MSFT".to_string(),
            timestamp: day.and_hms_opt(11, 15, 0).expect("valid fixture time"),
            confidence_score: 9.1,
            outcome_status: OutcomeStatus::HitSecondary,
            pnl: dec!(9.85),
        },
        TradeRecord {
            ticker: "TSLA".to_string(),
            timestamp: day.and_hms_opt(12, 0, 0).expect("valid fixture time"),
            confidence_score: 6.5,
            outcome_status: OutcomeStatus::StoppedOut,
            pnl: dec!(-5.3),
        },
    ]
}

/// The singleton performance summary.
pub fn performance_metrics() -> PerformanceMetrics {
    PerformanceMetrics {
        win_rate: 63.4,
        expectancy: dec!(1.7),
        profit_factor: 2.2,
        total_trades: 82,
        average_win: dec!(2.1),
        average_loss: dec!(-1.3),
        max_drawdown: dec!(-6.8),
        sharpe_ratio: 1.5,
    }
}
