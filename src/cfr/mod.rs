//! CFR (Counterfactual Regret Minimization) Trainer Module.
//!
//! This module provides a game-agnostic implementation of CFR self-play for
//! two-player, zero-sum, simultaneous-move games with three pure strategies.
//!
//! # Overview
//!
//! CFR is an iterative algorithm that converges to Nash equilibrium by:
//! 1. Computing counterfactual regret for each action against the opponent's move
//! 2. Updating strategies to minimize regret over time
//! 3. Averaging strategies across iterations to converge to equilibrium
//!
//! # Usage
//!
//! 1. Implement the `Game` trait for your game
//! 2. Create a `Trainer` with your game and configuration
//! 3. Call `train()` to run iterations
//! 4. Read the averaged strategies from the returned `TrainingResult`
//!
//! # Example
//!
//! ```
//! use rps_cfr::cfr::{Trainer, TrainerConfig};
//! use rps_cfr::games::rps::RockPaperScissors;
//!
//! let config = TrainerConfig::default().with_seed(42);
//! let mut trainer = Trainer::new(RockPaperScissors, config);
//!
//! let result = trainer.train(10_000).unwrap();
//! println!("Trained {} iterations in {:.2}s", result.stats.iterations, result.stats.elapsed_seconds);
//! println!("Strategy: {}", result.strategy());
//! ```
//!
//! # Theory
//!
//! **Regret**: What an action would have earned minus what was actually earned.
//! ```text
//! Regret(a) = Utility(a, opponent) - Utility(played, opponent)
//! ```
//!
//! **Regret Matching**: Set strategy proportional to positive regrets.
//! ```text
//! Strategy(a) = max(0, Regret(a)) / sum(max(0, Regret(a')))
//! ```
//!
//! **Convergence**: Average regret decreases as O(1/sqrt(T)), and the average strategy
//! converges to Nash equilibrium.
//!
//! # References
//!
//! - Zinkevich, M., et al. "Regret Minimization in Games with Incomplete Information" (2007)
//! - Hart, S., Mas-Colell, A. "A Simple Adaptive Procedure Leading to Correlated Equilibrium" (2000)

pub mod config;
pub mod error;
pub mod evaluation;
pub mod game;
pub mod history;
pub mod regret;
pub mod simulation;
pub mod strategy;
pub mod trainer;

// Re-export main types for convenient access
pub use config::{ConfigError, TrainerConfig, TrainingStats};
pub use error::CfrError;
pub use evaluation::{best_response, expected_value, exploitability};
pub use game::{Action, Game, NUM_ACTIONS};
pub use history::{average_strategy, StrategyHistory};
pub use regret::{CumulativeRegret, RegretVector};
pub use simulation::{simulate, SimulationResult};
pub use strategy::Strategy;
pub use trainer::{Trainer, TrainingResult, NUM_PLAYERS};
