//! Exact evaluation of mixed strategies.
//!
//! The trainer only ever sees sampled play. These helpers compute expected
//! values over the full payoff table, which makes them suitable for checking
//! how close a trained strategy is to equilibrium.

use crate::cfr::game::{Action, Game, NUM_ACTIONS};
use crate::cfr::strategy::Strategy;

/// Expected payoff to the row player when `row` meets `col`.
pub fn expected_value<G: Game>(game: &G, row: &Strategy, col: &Strategy) -> f64 {
    let mut value = 0.0;
    for a in G::Action::ALL {
        for b in G::Action::ALL {
            value += row.probability(a) * col.probability(b) * game.utility(a, b);
        }
    }
    value
}

/// Value of each pure strategy against a fixed opponent strategy, in index order.
pub fn action_values<G: Game>(game: &G, opponent: &Strategy) -> [f64; NUM_ACTIONS] {
    G::Action::ALL.map(|a| expected_value(game, &Strategy::pure(a), opponent))
}

/// The pure strategy that scores best against `opponent`, with its value.
///
/// Ties go to the lower index.
pub fn best_response<G: Game>(game: &G, opponent: &Strategy) -> (G::Action, f64) {
    let values = action_values(game, opponent);
    let (best, value) = values
        .iter()
        .copied()
        .enumerate()
        .fold((0, values[0]), |best, (i, v)| if v > best.1 { (i, v) } else { best });
    (G::Action::ALL[best], value)
}

/// How much a best-responding opponent wins per hand against `strategy`.
///
/// Zero means `strategy` cannot be exploited, which for a symmetric zero-sum
/// game with value zero is exactly the Nash equilibrium.
pub fn exploitability<G: Game>(game: &G, strategy: &Strategy) -> f64 {
    best_response(game, strategy).1.max(0.0)
}
