//! Event loop driver.

use crate::engine::BacktestEngine;

/// Runs the per-bar loop. Bar 0 is decided before the loop starts.
pub fn run_event_loop(engine: &mut BacktestEngine<'_>) {
    let len = engine.len();

    tracing::info!("Starting hedge simulation: {} bars", len);

    for idx in 1..len {
        engine.process_bar(idx);
    }
}
