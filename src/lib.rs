//! # RPS CFR
//!
//! Counterfactual Regret Minimization (CFR) self-play for computing an
//! approximate Nash equilibrium of Rock-Paper-Scissors.
//!
//! ## Features
//!
//! - **Game-agnostic Trainer**: Works with any three-action matrix game implementing `Game`
//! - **Regret Matching**: Strategies proportional to positive cumulative regret
//! - **Strategy Averaging**: Reports the time-averaged strategy, not the last iterate
//! - **Reproducible**: The random source is an injected, seedable generator
//! - **Evaluation**: Exact expected value and exploitability, plus Monte Carlo play
//!
//! ## Quick Start
//!
//! ```
//! use rps_cfr::games::rps::train_rps;
//!
//! let result = train_rps(10_000, Some(42)).unwrap();
//! println!("{}", result.strategy());
//! ```
//!
//! ## Modules
//!
//! - [`cfr`]: Core CFR trainer
//! - [`games`]: Game implementations (Rock-Paper-Scissors)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      CFR Trainer (Generic)                      │
//! │  - Regret calculation     - Regret matching                     │
//! │  - Move sampling          - Strategy averaging                  │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ implements Game trait
//!                               ▼
//!                      ┌─────────────────────┐
//!                      │ Rock-Paper-Scissors │
//!                      └─────────────────────┘
//! ```

#![warn(missing_docs)]

/// CFR (Counterfactual Regret Minimization) trainer module.
///
/// This is the core module containing the generic CFR algorithm.
pub mod cfr;

/// Game implementations module.
///
/// Contains Rock-Paper-Scissors for training and validation.
pub mod games;

// Re-export commonly used types at crate root for convenience
pub use cfr::{Action, CfrError, Game, Strategy, Trainer, TrainerConfig, TrainingResult};
pub use games::rps::{train_rps, Move, RockPaperScissors};
