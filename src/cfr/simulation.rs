//! Monte Carlo play between two fixed strategies.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cfr::config::ConfigError;
use crate::cfr::error::CfrError;
use crate::cfr::game::Game;
use crate::cfr::strategy::Strategy;

/// Tally of a simulated match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Hands played.
    pub hands: u64,
    /// Hands won by player 1.
    pub p1_wins: u64,
    /// Hands won by player 2.
    pub p2_wins: u64,
    /// Hands with zero payoff.
    pub ties: u64,
    /// Average payoff per hand to player 1.
    pub p1_ev: f64,
    /// Average payoff per hand to player 2.
    pub p2_ev: f64,
}

/// Play `hands` hands, each player sampling independently from their strategy.
///
/// EV is the mean realized payoff, so for unit payoffs it equals
/// `(p1_wins - p2_wins) / hands`.
pub fn simulate<G: Game, R: Rng + ?Sized>(
    game: &G,
    hands: u64,
    p1: &Strategy,
    p2: &Strategy,
    rng: &mut R,
) -> Result<SimulationResult, CfrError> {
    if hands == 0 {
        return Err(ConfigError::ZeroIterations.into());
    }

    let mut result = SimulationResult {
        hands,
        ..Default::default()
    };
    let mut total_payoff = 0.0;

    for _ in 0..hands {
        let a: G::Action = p1.sample(rng);
        let b: G::Action = p2.sample(rng);
        let payoff = game.utility(a, b);
        total_payoff += payoff;

        if payoff > 0.0 {
            result.p1_wins += 1;
        } else if payoff < 0.0 {
            result.p2_wins += 1;
        } else {
            result.ties += 1;
        }
    }

    result.p1_ev = total_payoff / hands as f64;
    result.p2_ev = -result.p1_ev;
    log::debug!(
        "simulated {} hands: p1 {} / p2 {} / ties {}",
        hands,
        result.p1_wins,
        result.p2_wins,
        result.ties
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfr::evaluation::expected_value;
    use crate::games::rps::{Move, RockPaperScissors};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_simulate_pure_matchup() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = simulate(
            &RockPaperScissors,
            100,
            &Strategy::pure(Move::Paper),
            &Strategy::pure(Move::Rock),
            &mut rng,
        )
        .unwrap();

        assert_eq!(result.p1_wins, 100);
        assert_eq!(result.p2_wins, 0);
        assert_eq!(result.ties, 0);
        assert_eq!(result.p1_ev, 1.0);
        assert_eq!(result.p2_ev, -1.0);
    }

    #[test]
    fn test_simulate_matches_expected_value() {
        let game = RockPaperScissors;
        let p1 = Strategy::new([0.1, 0.1, 0.8]).unwrap();
        let p2 = Strategy::new([0.8, 0.2, 0.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);

        let result = simulate(&game, 100_000, &p1, &p2, &mut rng).unwrap();

        assert_eq!(result.p1_wins + result.p2_wins + result.ties, 100_000);
        let wins_ev = (result.p1_wins as f64 - result.p2_wins as f64) / 100_000.0;
        assert!((result.p1_ev - wins_ev).abs() < 1e-12);
        assert!((result.p1_ev - expected_value(&game, &p1, &p2)).abs() < 0.02);
    }

    #[test]
    fn test_simulate_zero_hands() {
        let mut rng = StdRng::seed_from_u64(0);
        let uniform = Strategy::uniform();
        let result = simulate(&RockPaperScissors, 0, &uniform, &uniform, &mut rng);
        assert_eq!(result, Err(CfrError::Config(ConfigError::ZeroIterations)));
    }
}
