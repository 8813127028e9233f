//! Terminal rendering for the dashboard views.
//!
//! All functions here are pure: they take already-fetched data and
//! return the text to print, so each view has an exact, testable
//! output for both the data and placeholder branches.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt::Write;

use crate::api::HealthStatus;
use crate::dashboard::equity::EquityPoint;
use crate::models::{PerformanceMetrics, TradeRecord};

pub const DISCONNECTED_MSG: &str =
    "Cannot connect to backend. Start the stub API with: atp-dashboard serve";
pub const NO_METRICS_MSG: &str = "No performance data yet. Record some trades first!";
pub const NO_TRADES_MSG: &str = "No trades recorded yet";
pub const NO_TRADE_DATA_MSG: &str = "Could not load trade data";
pub const NO_HISTORY_MSG: &str = "Could not load trade history";

/// Width of the equity curve bars in characters.
const CHART_WIDTH: usize = 32;

pub fn render_connection(health: &HealthStatus) -> String {
    format!("Connected to backend API (v{})", health.version)
}

pub fn render_metrics(metrics: &PerformanceMetrics) -> String {
    let mut out = String::new();

    writeln!(out, "=== Performance Metrics ===").unwrap();
    writeln!(out, "Win Rate:       {}%", metrics.win_rate).unwrap();
    writeln!(out, "Expectancy:     ${:.2}", metrics.expectancy).unwrap();
    writeln!(out, "Profit Factor:  {:.2}", metrics.profit_factor).unwrap();
    writeln!(out, "Total Trades:   {}", metrics.total_trades).unwrap();

    out
}

/// Render the cumulative P&L series as a horizontal bar chart, one row
/// per trade in chronological order.
pub fn render_equity_chart(curve: &[EquityPoint]) -> String {
    let mut out = String::new();
    writeln!(out, "=== Equity Curve (Cumulative PnL) ===").unwrap();

    if curve.is_empty() {
        writeln!(out, "{}", NO_TRADES_MSG).unwrap();
        return out;
    }

    // Scale bars between the curve's extremes, anchoring zero inside
    // the range so an all-positive curve still starts near empty.
    let min = curve
        .iter()
        .map(|p| p.cumulative_pnl)
        .min()
        .unwrap_or(Decimal::ZERO)
        .min(Decimal::ZERO);
    let max = curve
        .iter()
        .map(|p| p.cumulative_pnl)
        .max()
        .unwrap_or(Decimal::ZERO)
        .max(Decimal::ZERO);
    let span = (max - min).to_f64().unwrap_or(0.0);

    for point in curve {
        let offset = (point.cumulative_pnl - min).to_f64().unwrap_or(0.0);
        let len = if span > 0.0 {
            ((offset / span) * CHART_WIDTH as f64).round() as usize
        } else {
            0
        };
        let value = point.cumulative_pnl.to_f64().unwrap_or(0.0);

        writeln!(
            out,
            "{}  {:<6} {:>9} |{}",
            point.timestamp.format("%Y-%m-%d %H:%M"),
            point.ticker,
            format!("{:+.2}", value),
            "█".repeat(len)
        )
        .unwrap();
    }

    out
}

/// Render the trade history table. Rows keep the order the API
/// returned them in; no re-sorting.
pub fn render_history_table(trades: &[TradeRecord]) -> String {
    let mut out = String::new();
    writeln!(out, "=== Trade History ===").unwrap();

    if trades.is_empty() {
        writeln!(out, "{}", NO_TRADES_MSG).unwrap();
        return out;
    }

    writeln!(
        out,
        "{:<8} {:<20} {:>10} {:<14} {:>9}",
        "TICKER", "TIMESTAMP", "CONFIDENCE", "OUTCOME", "PNL"
    )
    .unwrap();
    writeln!(out, "{}", "-".repeat(66)).unwrap();

    for trade in trades {
        writeln!(
            out,
            "{:<8} {:<20} {:>10.1} {:<14} {:>9}",
            trade.ticker,
            trade.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            trade.confidence_score,
            trade.outcome_status.as_str(),
            format!("{:.2}", trade.pnl)
        )
        .unwrap();
    }

    out
}
