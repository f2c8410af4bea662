//! Self-play CFR trainer for two-player matrix games.
//!
//! Each iteration both players derive a strategy from their cumulative regret
//! (regret matching), sample a move, and score every alternative move against
//! the opponent's realized one. Those regrets are folded into the running sums
//! and the strategies are recorded. After training the average of each
//! player's recorded strategies approximates a Nash equilibrium.
//!
//! The trainer is generic over any game that implements the `Game` trait.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::cfr::config::{ConfigError, TrainerConfig, TrainingStats};
use crate::cfr::error::CfrError;
use crate::cfr::evaluation;
use crate::cfr::game::Game;
use crate::cfr::history::StrategyHistory;
use crate::cfr::regret::{CumulativeRegret, RegretVector};
use crate::cfr::strategy::Strategy;

/// Number of players in every supported game.
pub const NUM_PLAYERS: usize = 2;

/// Learning state owned by one player.
#[derive(Debug, Clone, Default)]
struct PlayerState {
    cumulative_regret: CumulativeRegret,
    history: StrategyHistory,
}

/// Averaged strategies produced by a training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Time-averaged strategy for each player.
    pub average_strategies: [Strategy; NUM_PLAYERS],
    /// Statistics from the run.
    pub stats: TrainingStats,
}

impl TrainingResult {
    /// Averaged strategy of the first player.
    pub fn strategy(&self) -> &Strategy {
        &self.average_strategies[0]
    }
}

/// The main CFR trainer.
///
/// # Type Parameters
/// - `G`: The game type implementing the `Game` trait
///
/// # Example
/// ```
/// use rps_cfr::cfr::{Trainer, TrainerConfig};
/// use rps_cfr::games::rps::RockPaperScissors;
///
/// let mut trainer = Trainer::new(RockPaperScissors, TrainerConfig::default().with_seed(1));
/// let result = trainer.train(1_000).unwrap();
/// println!("{}", result.strategy());
/// ```
pub struct Trainer<G: Game> {
    /// The game being trained.
    game: G,

    /// Configuration for the trainer.
    config: TrainerConfig,

    /// Regret sums and strategy histories, indexed by player.
    players: [PlayerState; NUM_PLAYERS],

    /// Current iteration count.
    iteration: u64,

    /// Statistics tracking.
    stats: TrainingStats,

    /// Random number generator.
    rng: StdRng,
}

impl<G: Game> Trainer<G> {
    /// Create a new trainer for the given game.
    ///
    /// # Arguments
    /// * `game` - The game to train on
    /// * `config` - Configuration options for the trainer
    pub fn new(game: G, config: TrainerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            game,
            config,
            players: Default::default(),
            iteration: 0,
            stats: TrainingStats::new(),
            rng,
        }
    }

    /// Run a single self-play iteration.
    pub fn run_iteration(&mut self) {
        self.iteration += 1;

        let strategies = [
            Strategy::from_regrets(&self.players[0].cumulative_regret),
            Strategy::from_regrets(&self.players[1].cumulative_regret),
        ];

        let moves: [G::Action; NUM_PLAYERS] = [
            strategies[0].sample(&mut self.rng),
            strategies[1].sample(&mut self.rng),
        ];

        for (player, state) in self.players.iter_mut().enumerate() {
            let own = moves[player];
            let opponent = moves[1 - player];
            let regret = RegretVector::compute(&self.game, own, opponent);
            state.cumulative_regret.accumulate(&regret);
            state.history.push(strategies[player]);
        }
    }

    /// Train for `config.iterations` iterations and return the averaged strategies.
    pub fn run(&mut self) -> Result<TrainingResult, CfrError> {
        self.train(self.config.iterations)
    }

    /// Like [`Trainer::run`], calling `callback` every `callback_interval` iterations.
    pub fn run_with_callback<F>(
        &mut self,
        callback_interval: u64,
        callback: F,
    ) -> Result<TrainingResult, CfrError>
    where
        F: FnMut(&TrainingStats),
    {
        self.train_with_callback(self.config.iterations, callback_interval, callback)
    }

    /// Train for an explicit number of iterations, overriding `config.iterations`.
    ///
    /// Zero iterations is rejected: there would be nothing to average.
    ///
    /// # Arguments
    /// * `iterations` - Number of iterations to run
    pub fn train(&mut self, iterations: u64) -> Result<TrainingResult, CfrError> {
        self.train_with_callback(iterations, u64::MAX, |_| {})
    }

    /// Train with a callback for progress tracking.
    ///
    /// # Arguments
    /// * `iterations` - Number of iterations to run
    /// * `callback_interval` - How often to call the callback
    /// * `callback` - Function called every `callback_interval` iterations
    pub fn train_with_callback<F>(
        &mut self,
        iterations: u64,
        callback_interval: u64,
        mut callback: F,
    ) -> Result<TrainingResult, CfrError>
    where
        F: FnMut(&TrainingStats),
    {
        self.config.validate()?;
        if iterations == 0 {
            return Err(ConfigError::ZeroIterations.into());
        }
        if callback_interval == 0 {
            return Err(ConfigError::ZeroLogInterval.into());
        }

        log::info!("training {} iterations from iteration {}", iterations, self.iteration);
        let start_time = Instant::now();

        for i in 0..iterations {
            self.run_iteration();

            if let Some(interval) = self.config.log_interval {
                if self.iteration % interval == 0 {
                    log::debug!(
                        "iteration {}: p1 {} p2 {}",
                        self.iteration,
                        self.current_strategy_for(0),
                        self.current_strategy_for(1)
                    );
                }
            }

            if (i + 1) % callback_interval == 0 {
                self.update_stats(start_time);
                callback(&self.stats);
            }
        }

        self.update_stats(start_time);
        let result = TrainingResult {
            average_strategies: [self.average_strategy(0)?, self.average_strategy(1)?],
            stats: self.stats.clone(),
        };
        log::info!(
            "finished {} iterations in {:.3}s: average {}",
            self.iteration,
            self.stats.elapsed_seconds,
            result.strategy()
        );

        Ok(result)
    }

    fn update_stats(&mut self, start_time: Instant) {
        self.stats.iterations = self.iteration;
        self.stats.elapsed_seconds = start_time.elapsed().as_secs_f64();
        self.stats.update_rate();
    }

    fn player(&self, player: usize) -> Result<&PlayerState, CfrError> {
        self.players.get(player).ok_or(CfrError::InvalidPlayer(player))
    }

    fn current_strategy_for(&self, player: usize) -> Strategy {
        Strategy::from_regrets(&self.players[player].cumulative_regret)
    }

    /// Get the strategy a player would use in the next iteration.
    pub fn current_strategy(&self, player: usize) -> Result<Strategy, CfrError> {
        Ok(Strategy::from_regrets(&self.player(player)?.cumulative_regret))
    }

    /// Get the time-averaged strategy, which converges to Nash equilibrium.
    pub fn average_strategy(&self, player: usize) -> Result<Strategy, CfrError> {
        self.player(player)?.history.average()
    }

    /// Get a player's cumulative regret.
    pub fn cumulative_regret(&self, player: usize) -> Result<&CumulativeRegret, CfrError> {
        Ok(&self.player(player)?.cumulative_regret)
    }

    /// Get a player's strategy history.
    pub fn history(&self, player: usize) -> Result<&StrategyHistory, CfrError> {
        Ok(&self.player(player)?.history)
    }

    /// Calculate exploitability of the average strategies.
    ///
    /// Mean over both players of what a best response wins against their
    /// averaged strategy. Lower is better; 0 means Nash equilibrium.
    pub fn exploitability(&self) -> Result<f64, CfrError> {
        let mut total = 0.0;
        for player in 0..NUM_PLAYERS {
            let average = self.average_strategy(player)?;
            total += evaluation::exploitability(&self.game, &average);
        }
        Ok(total / NUM_PLAYERS as f64)
    }

    /// Get the current iteration count.
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Get current statistics.
    pub fn stats(&self) -> &TrainingStats {
        &self.stats
    }

    /// Get reference to the game.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Reset the trainer to initial state.
    ///
    /// The random generator keeps its position, so a reset seeded trainer
    /// does not replay its first run.
    pub fn reset(&mut self) {
        self.players = Default::default();
        self.iteration = 0;
        self.stats = TrainingStats::new();
    }
}
