//! Helpers for trade-derived metrics.

use hedge_types::{ExitReason, HedgeTrade, TradeStats};

/// Summarizes the hedge trade log.
///
/// Averages are 0 for an empty log.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Trade counts never exceed f64 mantissa precision
pub fn summarize_trades(trades: &[HedgeTrade]) -> TradeStats {
    let total = trades.len();
    if total == 0 {
        return TradeStats::default();
    }

    let count_reason =
        |reason: ExitReason| usize_to_u64(trades.iter().filter(|t| t.exit_reason == reason).count());
    let winning = usize_to_u64(trades.iter().filter(|t| t.is_win()).count());
    let total_f = total as f64;

    TradeStats {
        total_trades: usize_to_u64(total),
        stop_loss_exits: count_reason(ExitReason::StopLoss),
        signal_exits: count_reason(ExitReason::Signal),
        open_at_end: count_reason(ExitReason::EndOfData),
        winning_hedges: winning,
        win_rate: winning as f64 / total_f,
        avg_hedge_return: trades.iter().map(|t| t.hedge_return).sum::<f64>() / total_f,
        avg_bars_hedged: trades.iter().map(|t| t.bars_hedged as f64).sum::<f64>() / total_f,
    }
}

/// Counts bars `i >= 1` whose position differs from bar `i - 1`.
#[must_use]
pub fn count_position_changes(positions: &[f64]) -> u64 {
    usize_to_u64(positions.windows(2).filter(|w| w[1] != w[0]).count())
}

fn usize_to_u64(value: usize) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trade(reason: ExitReason, entry: f64, exit: f64, bars: usize) -> HedgeTrade {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        HedgeTrade {
            entry_date: day,
            entry_price: entry,
            exit_date: day,
            exit_price: exit,
            exit_reason: reason,
            bars_hedged: bars,
            hedge_return: entry / exit - 1.0,
        }
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize_trades(&[]), TradeStats::default());
    }

    #[test]
    fn test_summarize_trades() {
        let trades = vec![
            trade(ExitReason::StopLoss, 100.0, 106.0, 2),
            trade(ExitReason::Signal, 100.0, 80.0, 4),
            trade(ExitReason::EndOfData, 50.0, 50.0, 3),
        ];
        let stats = summarize_trades(&trades);

        assert_eq!(stats.total_trades, 3);
        assert_eq!(stats.stop_loss_exits, 1);
        assert_eq!(stats.signal_exits, 1);
        assert_eq!(stats.open_at_end, 1);
        assert_eq!(stats.winning_hedges, 1);
        assert!((stats.win_rate - 1.0 / 3.0).abs() < 1e-10);
        assert!((stats.avg_bars_hedged - 3.0).abs() < 1e-10);
        let expected = ((100.0 / 106.0 - 1.0) + 0.25 + 0.0) / 3.0;
        assert!((stats.avg_hedge_return - expected).abs() < 1e-10);
    }

    #[test]
    fn test_count_position_changes() {
        assert_eq!(count_position_changes(&[1.0, 1.0, 0.0, 0.0, 1.0]), 2);
        assert_eq!(count_position_changes(&[1.0]), 0);
        assert_eq!(count_position_changes(&[]), 0);
    }
}
