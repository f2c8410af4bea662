//! Per-iteration strategy history and the time-averaged strategy.
//!
//! The average of every strategy played is what converges to a Nash
//! equilibrium. The final iterate on its own does not.

use crate::cfr::error::CfrError;
use crate::cfr::game::NUM_ACTIONS;
use crate::cfr::strategy::Strategy;

/// Append-only record of the strategy a player used in each iteration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrategyHistory {
    strategies: Vec<Strategy>,
}

impl StrategyHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history with room for `capacity` iterations.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            strategies: Vec::with_capacity(capacity),
        }
    }

    /// Record one iteration's strategy.
    pub fn push(&mut self, strategy: Strategy) {
        self.strategies.push(strategy);
    }

    /// Number of recorded iterations.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Recorded strategies, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Strategy> {
        self.strategies.iter()
    }

    /// Most recently recorded strategy.
    pub fn last(&self) -> Option<&Strategy> {
        self.strategies.last()
    }

    /// Element-wise mean of every recorded strategy.
    pub fn average(&self) -> Result<Strategy, CfrError> {
        average_strategy(&self.strategies)
    }
}

/// Element-wise arithmetic mean of a sequence of strategies.
///
/// `result[i] = Σ_t history[t][i] / len(history)`. An empty sequence has no
/// mean and yields [`CfrError::EmptyHistory`].
pub fn average_strategy(history: &[Strategy]) -> Result<Strategy, CfrError> {
    if history.is_empty() {
        return Err(CfrError::EmptyHistory);
    }

    let mut sums = [0.0; NUM_ACTIONS];
    for strategy in history {
        for (sum, p) in sums.iter_mut().zip(strategy.probabilities()) {
            *sum += p;
        }
    }

    let count = history.len() as f64;
    Strategy::new(sums.map(|s| s / count))
}
