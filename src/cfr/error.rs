//! Errors raised by the CFR core.

use crate::cfr::config::ConfigError;

/// Contract violations detected by the trainer, averager, and sampler.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CfrError {
    /// Averaging was requested over zero strategies.
    #[error("cannot average an empty strategy history")]
    EmptyHistory,

    /// A probability vector was negative, non-finite, or did not sum to 1.
    #[error("malformed distribution {0:?}: entries must be non-negative and sum to 1")]
    MalformedDistribution([f64; 3]),

    /// Player index outside `0..2`.
    #[error("player index {0} is out of range, expected 0 or 1")]
    InvalidPlayer(usize),

    /// Invalid training or simulation configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
