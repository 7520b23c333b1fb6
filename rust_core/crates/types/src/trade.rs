use chrono::NaiveDate;

/// Reason a hedge segment was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitReason {
    /// Price rose above the stop-loss level
    StopLoss,
    /// Hedge signal switched off
    Signal,
    /// Segment still open on the last bar
    EndOfData,
}

/// One completed hedge segment
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HedgeTrade {
    /// Date of the first hedged bar
    pub entry_date: NaiveDate,
    /// Entry execution price
    pub entry_price: f64,
    /// Date of the first bar back at full exposure (last bar for `EndOfData`)
    pub exit_date: NaiveDate,
    /// Exit execution price
    pub exit_price: f64,
    /// Reason for exit
    pub exit_reason: ExitReason,
    /// Number of bars the hedge was active
    pub bars_hedged: usize,
    /// Short-leg result per unit: `entry_price / exit_price - 1`
    pub hedge_return: f64,
}

impl HedgeTrade {
    /// Returns true when the hedge gained (price fell while hedged).
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.hedge_return > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_serde_roundtrip() {
        let trade = HedgeTrade {
            entry_date: NaiveDate::from_ymd_opt(2022, 5, 2).unwrap(),
            entry_price: 38_000.0,
            exit_date: NaiveDate::from_ymd_opt(2022, 6, 20).unwrap(),
            exit_price: 20_500.0,
            exit_reason: ExitReason::Signal,
            bars_hedged: 49,
            hedge_return: 38_000.0 / 20_500.0 - 1.0,
        };

        let json = serde_json::to_string(&trade).unwrap();
        let deserialized: HedgeTrade = serde_json::from_str(&json).unwrap();

        assert_eq!(trade, deserialized);
        assert!(deserialized.is_win());
    }

    #[test]
    fn test_exit_reason_serialization() {
        assert_eq!(
            serde_json::to_string(&ExitReason::StopLoss).unwrap(),
            "\"stop_loss\""
        );
        assert_eq!(
            serde_json::to_string(&ExitReason::EndOfData).unwrap(),
            "\"end_of_data\""
        );
    }
}
