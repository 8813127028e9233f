//! Aggregate performance metrics as returned by `/performance_metrics`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio-level performance summary.
///
/// Ratios are plain floats; currency-denominated fields are `Decimal`
/// so repeated serialization stays byte-identical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Win rate as a percentage (0-100)
    pub win_rate: f64,

    /// Average expected P&L per trade
    pub expectancy: Decimal,

    /// Gross profit / gross loss
    pub profit_factor: f64,

    /// Total number of closed trades
    pub total_trades: u32,

    /// Average profit on winning trades
    pub average_win: Decimal,

    /// Average loss on losing trades (negative)
    pub average_loss: Decimal,

    /// Peak-to-trough decline in cumulative P&L (negative)
    pub max_drawdown: Decimal,

    /// Annualized risk-adjusted return
    pub sharpe_ratio: f64,
}
