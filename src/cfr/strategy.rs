//! Mixed strategies: regret matching and inverse-CDF sampling.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cfr::error::CfrError;
use crate::cfr::game::{Action, NUM_ACTIONS};
use crate::cfr::regret::CumulativeRegret;

/// Tolerance on `Σ p = 1` when accepting an external distribution.
pub const DISTRIBUTION_TOLERANCE: f64 = 1e-6;

/// A probability distribution over the pure strategies, in index order.
///
/// A `Strategy` can only be created valid: every entry is finite and
/// non-negative, and the entries sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; NUM_ACTIONS]", into = "[f64; NUM_ACTIONS]")]
pub struct Strategy([f64; NUM_ACTIONS]);

impl Strategy {
    /// Equal probability on every action.
    pub fn uniform() -> Self {
        Self([1.0 / NUM_ACTIONS as f64; NUM_ACTIONS])
    }

    /// All probability on a single action.
    pub fn pure<A: Action>(action: A) -> Self {
        let mut probabilities = [0.0; NUM_ACTIONS];
        probabilities[action.index()] = 1.0;
        Self(probabilities)
    }

    /// Validate and wrap an external probability vector.
    pub fn new(probabilities: [f64; NUM_ACTIONS]) -> Result<Self, CfrError> {
        let well_formed = probabilities.iter().all(|p| p.is_finite() && *p >= 0.0);
        let sum: f64 = probabilities.iter().sum();
        if !well_formed || (sum - 1.0).abs() > DISTRIBUTION_TOLERANCE {
            return Err(CfrError::MalformedDistribution(probabilities));
        }
        Ok(Self(probabilities))
    }

    /// Regret matching.
    ///
    /// Probability is proportional to positive accumulated regret. Actions with
    /// zero or negative regret get exactly zero. If no action has positive
    /// regret (including the all-zero starting point) the strategy is uniform.
    pub fn from_regrets(regrets: &CumulativeRegret) -> Self {
        let total = regrets.total_positive();
        if total <= 0.0 {
            return Self::uniform();
        }
        Self(regrets.values().map(|r| r.max(0.0) / total))
    }

    /// Probability assigned to a single action.
    pub fn probability<A: Action>(&self, action: A) -> f64 {
        self.0[action.index()]
    }

    /// Probabilities in index order.
    pub fn probabilities(&self) -> [f64; NUM_ACTIONS] {
        self.0
    }

    /// Inverse-CDF lookup for a draw `u` in `[0, 1)`.
    ///
    /// Walks the actions in index order with a running sum `c` and returns the
    /// first action with non-zero probability where `u <= c`. A draw that lands
    /// exactly on a boundary therefore goes to the lower index. Rounding can
    /// leave the final sum a hair under 1, so the last non-zero action absorbs
    /// any shortfall.
    pub fn sample_index(&self, u: f64) -> usize {
        let mut cumulative = 0.0;
        let mut last = 0;
        for (i, &p) in self.0.iter().enumerate() {
            if p <= 0.0 {
                continue;
            }
            cumulative += p;
            last = i;
            if u <= cumulative {
                return i;
            }
        }
        last
    }

    /// Draw one action from this distribution.
    pub fn sample<A: Action, R: Rng + ?Sized>(&self, rng: &mut R) -> A {
        let u: f64 = rng.gen();
        A::ALL[self.sample_index(u)]
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::uniform()
    }
}

impl TryFrom<[f64; NUM_ACTIONS]> for Strategy {
    type Error = CfrError;

    fn try_from(probabilities: [f64; NUM_ACTIONS]) -> Result<Self, Self::Error> {
        Self::new(probabilities)
    }
}

impl From<Strategy> for [f64; NUM_ACTIONS] {
    fn from(strategy: Strategy) -> Self {
        strategy.0
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{:.4}, {:.4}, {:.4}]", a, b, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::rps::Move;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_normalized(strategy: &Strategy) {
        let probabilities = strategy.probabilities();
        let sum: f64 = probabilities.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "sum {} for {:?}", sum, probabilities);
        assert!(probabilities.iter().all(|&p| p >= 0.0));
    }

    #[test]
    fn test_uniform_fallback() {
        let third = 1.0 / 3.0;
        for regrets in [[0.0, 0.0, 0.0], [-1.0, -2.0, -3.0], [0.0, -5.0, 0.0]] {
            let strategy = Strategy::from_regrets(&CumulativeRegret::from_values(regrets));
            assert_eq!(strategy.probabilities(), [third, third, third]);
        }
    }

    #[test]
    fn test_regret_matching_proportional() {
        let regrets = CumulativeRegret::from_values([1.0, 3.0, -4.0]);
        let strategy = Strategy::from_regrets(&regrets);
        assert_eq!(strategy.probabilities(), [0.25, 0.75, 0.0]);
        assert_eq!(strategy.probability(Move::Scissors), 0.0);
    }

    #[test]
    fn test_regret_matching_normalized() {
        let cases = [
            [1.0, 0.0, 0.0],
            [0.1, 0.2, 0.3],
            [7.0, -1.0, 13.0],
            [1e-12, 5e6, 3.0],
            [-0.5, 0.5, -0.5],
            [2.0, 2.0, 2.0],
        ];
        for regrets in cases {
            let strategy = Strategy::from_regrets(&CumulativeRegret::from_values(regrets));
            assert_normalized(&strategy);
        }
    }

    #[test]
    fn test_regret_matching_is_pure() {
        let regrets = CumulativeRegret::from_values([4.0, -2.0, 1.0]);
        let first = Strategy::from_regrets(&regrets);
        for _ in 0..10 {
            assert_eq!(Strategy::from_regrets(&regrets), first);
        }
    }

    #[test]
    fn test_new_rejects_malformed() {
        assert!(Strategy::new([0.5, 0.5, 0.0]).is_ok());
        assert!(matches!(
            Strategy::new([0.5, 0.6, 0.0]),
            Err(CfrError::MalformedDistribution(_))
        ));
        assert!(Strategy::new([1.5, -0.5, 0.0]).is_err());
        assert!(Strategy::new([f64::NAN, 0.5, 0.5]).is_err());
    }

    #[test]
    fn test_sample_index_boundaries() {
        let strategy = Strategy::new([0.2, 0.3, 0.5]).unwrap();
        assert_eq!(strategy.sample_index(0.0), 0);
        assert_eq!(strategy.sample_index(0.2), 0);
        assert_eq!(strategy.sample_index(0.2001), 1);
        assert_eq!(strategy.sample_index(0.5), 1);
        assert_eq!(strategy.sample_index(0.75), 2);
        assert_eq!(strategy.sample_index(0.999_999), 2);
    }

    #[test]
    fn test_sampler_coverage_pure_strategies() {
        let rock = Strategy::pure(Move::Rock);
        let scissors = Strategy::pure(Move::Scissors);
        for u in [0.0, 1e-12, 0.25, 0.5, 0.999_999_999] {
            assert_eq!(rock.sample_index(u), Move::Rock.index());
            assert_eq!(scissors.sample_index(u), Move::Scissors.index());
        }

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            assert_eq!(rock.sample::<Move, _>(&mut rng), Move::Rock);
            assert_eq!(scissors.sample::<Move, _>(&mut rng), Move::Scissors);
        }
    }

    #[test]
    fn test_sampler_frequencies() {
        let strategy = Strategy::new([0.1, 0.1, 0.8]).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let mut counts = [0usize; 3];
        let draws = 100_000;
        for _ in 0..draws {
            let mv: Move = strategy.sample(&mut rng);
            counts[mv.index()] += 1;
        }
        for (i, &count) in counts.iter().enumerate() {
            let freq = count as f64 / draws as f64;
            assert!(
                (freq - strategy.probabilities()[i]).abs() < 0.01,
                "action {} frequency {}",
                i,
                freq
            );
        }
    }

    #[test]
    fn test_serde_validates() {
        let strategy: Strategy = serde_json::from_str("[0.25, 0.25, 0.5]").unwrap();
        assert_eq!(strategy.probability(Move::Scissors), 0.5);
        assert_eq!(serde_json::to_string(&strategy).unwrap(), "[0.25,0.25,0.5]");
        assert!(serde_json::from_str::<Strategy>("[0.9, 0.9, 0.9]").is_err());
    }
}
