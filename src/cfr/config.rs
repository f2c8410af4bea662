//! Configuration options for the CFR trainer.
//!
//! This module provides the configuration struct that controls a training run
//! and the statistics collected while it executes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for the CFR trainer.
///
/// # Example
/// ```
/// use rps_cfr::cfr::TrainerConfig;
///
/// let config = TrainerConfig::default().with_seed(7);
/// assert_eq!(config.iterations, 10_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Number of self-play iterations to run.
    ///
    /// Training never stops early; exactly this many iterations are played.
    pub iterations: u64,

    /// Random seed for reproducibility.
    ///
    /// If set, the trainer seeds its generator with this value, making runs
    /// reproducible. If `None`, the generator is seeded from OS entropy.
    pub seed: Option<u64>,

    /// Emit a `debug!` log line every this many iterations.
    ///
    /// Set to `None` to disable periodic logging.
    pub log_interval: Option<u64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            seed: None,
            log_interval: None,
        }
    }
}

impl TrainerConfig {
    /// Create a new TrainerConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set iteration count.
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: set periodic logging interval.
    pub fn with_log_interval(mut self, interval: u64) -> Self {
        self.log_interval = Some(interval);
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if self.log_interval == Some(0) {
            return Err(ConfigError::ZeroLogInterval);
        }
        Ok(())
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    ///
    /// Missing fields take their default values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Errors that can occur when validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A run was requested with zero iterations or zero hands.
    #[error("iteration count must be positive")]
    ZeroIterations,
    /// Logging interval of zero.
    #[error("log interval must be positive")]
    ZeroLogInterval,
    /// Config file could not be read.
    #[error("failed to read config: {0}")]
    Io(String),
    /// Config file is not valid JSON for this struct.
    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// Statistics tracked during training.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Total number of iterations completed.
    pub iterations: u64,

    /// Total time spent training (in seconds).
    pub elapsed_seconds: f64,

    /// Iterations per second.
    pub iterations_per_second: f64,
}

impl TrainingStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update iterations per second based on elapsed time.
    pub fn update_rate(&mut self) {
        if self.elapsed_seconds > 0.0 {
            self.iterations_per_second = self.iterations as f64 / self.elapsed_seconds;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TrainerConfig::default();
        assert_eq!(config.iterations, 10_000);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = TrainerConfig::new().with_iterations(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroIterations));
    }

    #[test]
    fn test_zero_log_interval_rejected() {
        let config = TrainerConfig::new().with_log_interval(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroLogInterval));
    }

    #[test]
    fn test_from_json_str_fills_defaults() {
        let config = TrainerConfig::from_json_str(r#"{ "seed": 42 }"#).unwrap();
        assert_eq!(config.iterations, 10_000);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_interval, None);
    }

    #[test]
    fn test_from_json_str_errors() {
        assert!(matches!(
            TrainerConfig::from_json_str("not json"),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(
            TrainerConfig::from_json_str(r#"{ "iterations": 0 }"#),
            Err(ConfigError::ZeroIterations)
        );
    }

    #[test]
    fn test_from_missing_file() {
        let result = TrainerConfig::from_json_file("/nonexistent/rps-cfr/config.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_stats_rate() {
        let mut stats = TrainingStats {
            iterations: 500,
            elapsed_seconds: 2.0,
            ..Default::default()
        };
        stats.update_rate();
        assert_eq!(stats.iterations_per_second, 250.0);
    }
}
