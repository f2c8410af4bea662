//! Rock-Paper-Scissors implementation for CFR validation.
//!
//! Rock-Paper-Scissors is the smallest interesting zero-sum game: it has no
//! pure equilibrium, and its unique mixed equilibrium is known exactly.
//!
//! ## Game Rules
//!
//! - 2 players choose simultaneously from Rock (0), Paper (1), Scissors (2)
//! - Rock beats Scissors, Scissors beats Paper, Paper beats Rock
//! - The winner scores +1, the loser -1, a tie scores 0
//!
//! ## Payoff Table (row player)
//!
//! ```text
//!              Rock  Paper  Scissors
//! Rock           0     -1        +1
//! Paper         +1      0        -1
//! Scissors      -1     +1         0
//! ```
//!
//! ## Known Nash Equilibrium
//!
//! Both players mix uniformly: (1/3, 1/3, 1/3). The game value is 0.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cfr::config::TrainerConfig;
use crate::cfr::error::CfrError;
use crate::cfr::game::Game;
use crate::cfr::trainer::{Trainer, TrainingResult};
use crate::impl_action;

/// A pure strategy in Rock-Paper-Scissors.
///
/// Variant order is the index order used by every strategy and regret vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Index 0. Beats Scissors.
    Rock,
    /// Index 1. Beats Rock.
    Paper,
    /// Index 2. Beats Paper.
    Scissors,
}

impl_action!(Move { Rock, Paper, Scissors });

impl Move {
    /// The move this one defeats.
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Rock => write!(f, "Rock"),
            Move::Paper => write!(f, "Paper"),
            Move::Scissors => write!(f, "Scissors"),
        }
    }
}

/// Rock-Paper-Scissors game.
#[derive(Debug, Clone, Copy, Default)]
pub struct RockPaperScissors;

impl RockPaperScissors {
    /// Create a new Rock-Paper-Scissors game.
    pub fn new() -> Self {
        Self
    }
}

impl Game for RockPaperScissors {
    type Action = Move;

    fn utility(&self, row: Move, col: Move) -> f64 {
        use Move::*;

        match (row, col) {
            (Rock, Rock) | (Paper, Paper) | (Scissors, Scissors) => 0.0,
            (Rock, Scissors) | (Scissors, Paper) | (Paper, Rock) => 1.0,
            (Rock, Paper) | (Paper, Scissors) | (Scissors, Rock) => -1.0,
        }
    }
}

/// Train Rock-Paper-Scissors by self-play.
///
/// Returns the averaged strategies of both players. Pass a seed for a
/// reproducible run.
pub fn train_rps(iterations: u64, seed: Option<u64>) -> Result<TrainingResult, CfrError> {
    let mut config = TrainerConfig::new().with_iterations(iterations);
    config.seed = seed;
    config.validate()?;

    Trainer::new(RockPaperScissors, config).run()
}
