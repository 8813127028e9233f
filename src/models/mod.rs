//! Data models for trade records and performance metrics.

mod metrics;
mod trade;

pub use metrics::PerformanceMetrics;
pub use trade::{OutcomeStatus, TradeRecord};
