//! Hedge overlay engine.
//!
//! Walks price and signal series bar by bar through a two-state machine.
//! Every decision on bar `i` reads bar `i - 1` only: its close (per
//! `price_source`) and its signal.

use hedge_types::{
    BacktestParams, BacktestResult, EntryPricePolicy, ExitReason, HedgeSignal, HedgeTrade,
    PositionState, PriceBar, PriceField,
};
use tracing::{debug, warn};

use crate::equity::compose;
use crate::error::BacktestError;
use crate::event_loop;

/// Simulation state carried from one bar to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HedgeState {
    /// Fully exposed, no hedge.
    Flat,
    /// Hedge active since bar `entry_idx`.
    Hedged {
        /// Execution price on entry, reference for the stop-loss
        entry_price: f64,
        /// First hedged bar
        entry_idx: usize,
    },
}

impl HedgeState {
    /// Exposure produced by this state.
    #[must_use]
    pub fn position(self) -> PositionState {
        match self {
            HedgeState::Flat => PositionState::Exposed,
            HedgeState::Hedged { .. } => PositionState::Hedged,
        }
    }
}

/// Checks simulation parameters without clamping.
///
/// # Errors
/// Returns [`BacktestError::ConfigValidation`] for a non-positive capital, a
/// negative hedge ratio or stop-loss, non-finite values, or volume as the
/// price source.
pub fn validate_params(params: &BacktestParams) -> Result<(), BacktestError> {
    if !params.initial_capital.is_finite() || params.initial_capital <= 0.0 {
        return Err(BacktestError::ConfigValidation(format!(
            "initial_capital must be > 0, got {}",
            params.initial_capital
        )));
    }
    if !params.hedge_ratio.is_finite() || params.hedge_ratio < 0.0 {
        return Err(BacktestError::ConfigValidation(format!(
            "hedge_ratio must be >= 0, got {}",
            params.hedge_ratio
        )));
    }
    if !params.stop_loss_perc.is_finite() || params.stop_loss_perc < 0.0 {
        return Err(BacktestError::ConfigValidation(format!(
            "stop_loss_perc must be >= 0, got {}",
            params.stop_loss_perc
        )));
    }
    if params.price_source == PriceField::Volume {
        return Err(BacktestError::ConfigValidation(
            "price_source must be a price column, got volume".to_string(),
        ));
    }
    Ok(())
}

/// Runs one simulation and composes both equity curves.
///
/// Pure: nothing outlives the call, so repeated or concurrent runs with any
/// parameters are independent.
///
/// # Errors
/// Returns [`BacktestError::ConfigValidation`] on invalid parameters,
/// [`BacktestError::LengthMismatch`] when `signals` does not line up with
/// `bars`, and [`BacktestError::InsufficientData`] on an empty table.
pub fn run_backtest(
    bars: &[PriceBar],
    signals: &[HedgeSignal],
    params: &BacktestParams,
) -> Result<BacktestResult, BacktestError> {
    let engine = BacktestEngine::new(bars, signals, *params)?;
    Ok(engine.run())
}

/// Per-run engine state.
#[derive(Debug)]
pub struct BacktestEngine<'a> {
    bars: &'a [PriceBar],
    signals: &'a [HedgeSignal],
    params: BacktestParams,
    prices: Vec<f64>,
    state: HedgeState,
    position: Vec<PositionState>,
    trades: Vec<HedgeTrade>,
}

impl<'a> BacktestEngine<'a> {
    /// Creates an engine over aligned price and signal series.
    ///
    /// # Errors
    /// See [`run_backtest`].
    pub fn new(
        bars: &'a [PriceBar],
        signals: &'a [HedgeSignal],
        params: BacktestParams,
    ) -> Result<Self, BacktestError> {
        validate_params(&params)?;
        if bars.len() != signals.len() {
            return Err(BacktestError::LengthMismatch {
                prices: bars.len(),
                signals: signals.len(),
            });
        }
        if bars.is_empty() {
            return Err(BacktestError::InsufficientData {
                required: 1,
                available: 0,
            });
        }

        Ok(Self {
            bars,
            signals,
            params,
            prices: hedge_types::column(bars, params.price_source),
            state: HedgeState::Flat,
            position: Vec::with_capacity(bars.len()),
            trades: Vec::new(),
        })
    }

    /// Runs the event loop and returns the result.
    #[must_use]
    pub fn run(mut self) -> BacktestResult {
        // no prior bar to decide from
        self.position.push(PositionState::Exposed);
        event_loop::run_event_loop(&mut self);
        self.close_open_hedge();

        let curves = compose(
            &self.prices,
            &self.position,
            self.params.initial_capital,
            self.params.hedge_ratio,
        );

        BacktestResult {
            dates: self.bars.iter().map(|bar| bar.date).collect(),
            hedged_equity: curves.hedged,
            long_only_equity: curves.long_only,
            hedge_only_returns: curves.hedge_only_returns,
            position: self.position,
            trades: self.trades,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.bars.len()
    }

    pub(crate) fn process_bar(&mut self, idx: usize) {
        let prev_close = self.prices[idx - 1];
        let prev_signal = self.signals[idx - 1];

        let state = self.state;
        self.state = match state {
            HedgeState::Flat if prev_signal.is_hedge() => {
                let entry_price = self.execution_price(idx);
                debug!(
                    date = %self.bars[idx].date,
                    entry_price,
                    "hedge entry"
                );
                HedgeState::Hedged {
                    entry_price,
                    entry_idx: idx,
                }
            }
            HedgeState::Hedged {
                entry_price,
                entry_idx,
            } => match self.exit_reason(prev_close, prev_signal, entry_price) {
                // An exit never re-enters on the same bar.
                Some(reason) => {
                    self.record_trade(entry_idx, entry_price, idx, reason);
                    HedgeState::Flat
                }
                None => state,
            },
            HedgeState::Flat => HedgeState::Flat,
        };

        self.position.push(self.state.position());
    }

    /// Stop-loss is checked before the signal exit.
    fn exit_reason(
        &self,
        prev_close: f64,
        prev_signal: HedgeSignal,
        entry_price: f64,
    ) -> Option<ExitReason> {
        let stop = self.params.stop_loss_perc;
        if stop > 0.0 && prev_close > entry_price * (1.0 + stop) {
            Some(ExitReason::StopLoss)
        } else if !prev_signal.is_hedge() {
            Some(ExitReason::Signal)
        } else {
            None
        }
    }

    fn execution_price(&self, idx: usize) -> f64 {
        match self.params.entry_price_policy {
            EntryPricePolicy::PreviousClose => self.prices[idx - 1],
            EntryPricePolicy::CurrentOpen => self.scaled_open(idx),
        }
    }

    /// Open of bar `idx` on the scale of `price_source`, so entries, exits
    /// and the stop level compare like with like.
    fn scaled_open(&self, idx: usize) -> f64 {
        let bar = &self.bars[idx];
        match self.params.price_source {
            PriceField::AdjustedClose if bar.close > 0.0 => {
                bar.open * bar.adjusted_close / bar.close
            }
            _ => bar.open,
        }
    }

    fn record_trade(
        &mut self,
        entry_idx: usize,
        entry_price: f64,
        exit_idx: usize,
        reason: ExitReason,
    ) {
        let exit_price = self.execution_price(exit_idx);
        debug!(
            date = %self.bars[exit_idx].date,
            exit_price,
            reason = ?reason,
            "hedge exit"
        );
        self.push_trade(entry_idx, entry_price, exit_idx, exit_price, reason);
    }

    fn close_open_hedge(&mut self) {
        if let HedgeState::Hedged {
            entry_price,
            entry_idx,
        } = self.state
        {
            let last = self.len() - 1;
            let exit_price = self.prices[last];
            warn!(
                entry_date = %self.bars[entry_idx].date,
                last_date = %self.bars[last].date,
                "hedge still open at end of data"
            );
            // counts the last bar as hedged
            self.push_trade(entry_idx, entry_price, last + 1, exit_price, ExitReason::EndOfData);
        }
    }

    fn push_trade(
        &mut self,
        entry_idx: usize,
        entry_price: f64,
        exit_idx: usize,
        exit_price: f64,
        exit_reason: ExitReason,
    ) {
        let exit_date = self.bars[exit_idx.min(self.len() - 1)].date;
        self.trades.push(HedgeTrade {
            entry_date: self.bars[entry_idx].date,
            entry_price,
            exit_date,
            exit_price,
            exit_reason,
            bars_hedged: exit_idx - entry_idx,
            hedge_return: entry_price / exit_price - 1.0,
        });
    }
}
