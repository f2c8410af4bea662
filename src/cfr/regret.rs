//! Counterfactual regret vectors and their running sums.

use crate::cfr::game::{Action, Game, NUM_ACTIONS};

/// Regret for each pure strategy against one observed opponent move.
///
/// Entry `i` is the payoff the player would have gained by playing action `i`
/// instead of the action actually played. Entries may be negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegretVector([f64; NUM_ACTIONS]);

impl RegretVector {
    /// Compute counterfactual regrets for `actual`, holding `opponent` fixed.
    ///
    /// `regret[c] = utility(c, opponent) - utility(actual, opponent)`, so the
    /// entry for `actual` itself is always zero.
    pub fn compute<G: Game>(game: &G, actual: G::Action, opponent: G::Action) -> Self {
        let realized = game.utility(actual, opponent);
        let mut regrets = [0.0; NUM_ACTIONS];
        for candidate in G::Action::ALL {
            regrets[candidate.index()] = game.utility(candidate, opponent) - realized;
        }
        Self(regrets)
    }

    /// Regret for a single action.
    pub fn get<A: Action>(&self, action: A) -> f64 {
        self.0[action.index()]
    }

    /// Regrets in index order.
    pub fn values(&self) -> [f64; NUM_ACTIONS] {
        self.0
    }
}

/// Element-wise sum of every regret vector a player has observed.
///
/// Starts at zero and is the only input to the player's next strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CumulativeRegret([f64; NUM_ACTIONS]);

impl CumulativeRegret {
    /// Zero regret for every action.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from explicit values, in index order.
    pub fn from_values(values: [f64; NUM_ACTIONS]) -> Self {
        Self(values)
    }

    /// Fold one iteration's regrets into the running sum.
    pub fn accumulate(&mut self, regret: &RegretVector) {
        for (total, delta) in self.0.iter_mut().zip(regret.0) {
            *total += delta;
        }
    }

    /// Sum of the positive parts, `Σ max(0, r)`.
    pub fn total_positive(&self) -> f64 {
        self.0.iter().map(|&r| r.max(0.0)).sum()
    }

    /// Accumulated regret for a single action.
    pub fn get<A: Action>(&self, action: A) -> f64 {
        self.0[action.index()]
    }

    /// Accumulated regrets in index order.
    pub fn values(&self) -> [f64; NUM_ACTIONS] {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::rps::{Move, RockPaperScissors};

    #[test]
    fn test_regret_at_self_is_zero() {
        let game = RockPaperScissors;
        for actual in Move::ALL {
            for opponent in Move::ALL {
                let regret = RegretVector::compute(&game, actual, opponent);
                assert_eq!(regret.get(actual), 0.0, "{:?} vs {:?}", actual, opponent);
            }
        }
    }

    #[test]
    fn test_regret_after_loss() {
        // Rock loses to Paper: Scissors would have won, Paper would have tied.
        let regret = RegretVector::compute(&RockPaperScissors, Move::Rock, Move::Paper);
        assert_eq!(regret.values(), [0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_regret_after_win() {
        // Rock beats Scissors: every alternative is worse.
        let regret = RegretVector::compute(&RockPaperScissors, Move::Rock, Move::Scissors);
        assert_eq!(regret.values(), [0.0, -2.0, -1.0]);
    }

    #[test]
    fn test_regret_is_pure() {
        let game = RockPaperScissors;
        let first = RegretVector::compute(&game, Move::Paper, Move::Scissors);
        for _ in 0..10 {
            assert_eq!(RegretVector::compute(&game, Move::Paper, Move::Scissors), first);
        }
    }

    #[test]
    fn test_cumulative_regret_accumulates() {
        let game = RockPaperScissors;
        let mut cumulative = CumulativeRegret::new();
        assert_eq!(cumulative.values(), [0.0; 3]);

        cumulative.accumulate(&RegretVector::compute(&game, Move::Rock, Move::Paper));
        cumulative.accumulate(&RegretVector::compute(&game, Move::Rock, Move::Scissors));

        assert_eq!(cumulative.values(), [0.0, -1.0, 1.0]);
        assert_eq!(cumulative.get(Move::Scissors), 1.0);
        assert_eq!(cumulative.total_positive(), 1.0);
    }
}
