//! Cumulative P&L series for the equity curve view.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::models::TradeRecord;

/// One point on the equity curve.
#[derive(Debug, Clone, PartialEq)]
pub struct EquityPoint {
    pub timestamp: NaiveDateTime,
    pub ticker: String,
    pub cumulative_pnl: Decimal,
}

/// Sort trades by timestamp ascending and accumulate P&L.
///
/// The input order does not matter; the curve is always chronological.
pub fn equity_curve(trades: &[TradeRecord]) -> Vec<EquityPoint> {
    let mut sorted: Vec<&TradeRecord> = trades.iter().collect();
    sorted.sort_by_key(|t| t.timestamp);

    let mut cumulative = Decimal::ZERO;
    sorted
        .into_iter()
        .map(|t| {
            cumulative += t.pnl;
            EquityPoint {
                timestamp: t.timestamp,
                ticker: t.ticker.clone(),
                cumulative_pnl: cumulative,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OutcomeStatus;
    use rust_decimal_macros::dec;

    fn record(ticker: &str, timestamp: &str, pnl: Decimal) -> TradeRecord {
        TradeRecord {
            ticker: ticker.to_string(),
            timestamp: timestamp.parse().unwrap(),
            confidence_score: 5.0,
            outcome_status: OutcomeStatus::HitTarget,
            pnl,
        }
    }

    #[test]
    fn test_cumulative_sums_for_fixture_trades() {
        let trades = vec![
            record("AAPL", "2024-12-19T10:30:00", dec!(5.0)),
            record("MSFT", "2024-12-19T11:15:00", dec!(9.85)),
            record("TSLA", "2024-12-19T12:00:00", dec!(-5.3)),
        ];

        let curve = equity_curve(&trades);
        let values: Vec<Decimal> = curve.iter().map(|p| p.cumulative_pnl).collect();
        assert_eq!(values, vec![dec!(5.0), dec!(14.85), dec!(9.55)]);
    }

    #[test]
    fn test_sorts_by_timestamp_before_accumulating() {
        // TSLA first in API order but chronologically last
        let trades = vec![
            record("TSLA", "2024-12-19T12:00:00", dec!(-5.3)),
            record("AAPL", "2024-12-19T10:30:00", dec!(5.0)),
            record("MSFT", "2024-12-19T11:15:00", dec!(9.85)),
        ];

        let curve = equity_curve(&trades);
        let tickers: Vec<&str> = curve.iter().map(|p| p.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["AAPL", "MSFT", "TSLA"]);
        assert_eq!(curve.last().unwrap().cumulative_pnl, dec!(9.55));
    }

    #[test]
    fn test_empty_history_yields_empty_curve() {
        assert!(equity_curve(&[]).is_empty());
    }
}
