//! Game trait definition for the CFR trainer.
//!
//! Any two-player, zero-sum, simultaneous-move game over three pure strategies
//! that implements the `Game` trait can be trained with CFR self-play.
//! The payoff function is the only game-specific knowledge the algorithm needs.

use std::fmt::Debug;
use std::hash::Hash;

/// Number of pure strategies available to each player.
pub const NUM_ACTIONS: usize = 3;

/// Trait for pure strategies (actions) a player can choose.
///
/// Every action has a fixed position in `0..NUM_ACTIONS`. That position is used
/// as the index into every strategy and regret vector, so `index` and
/// `from_index` must be inverse to each other over the whole range.
pub trait Action: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// All actions, in index order.
    const ALL: [Self; NUM_ACTIONS];

    /// Position of this action in strategy and regret vectors.
    fn index(self) -> usize;

    /// Map a vector position back to its action.
    ///
    /// Returns `None` for positions outside `0..NUM_ACTIONS`.
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Short name used for display.
    fn name(&self) -> String;
}

/// The main Game trait: the payoff table of a matrix game.
///
/// # Example
/// ```ignore
/// #[derive(Clone)]
/// struct MyGame;
///
/// impl Game for MyGame {
///     type Action = MyAction;
///
///     fn utility(&self, row: MyAction, col: MyAction) -> f64 {
///         // ...
///     }
/// }
/// ```
pub trait Game: Clone + Send + Sync {
    /// The pure strategy type.
    type Action: Action;

    /// Payoff to the row player when `row` meets `col`.
    ///
    /// Must be defined for every pair of actions. The game is zero-sum, so the
    /// column player receives the negation.
    fn utility(&self, row: Self::Action, col: Self::Action) -> f64;

    /// Get a human-readable name for an action.
    fn action_name(&self, action: Self::Action) -> String {
        action.name()
    }
}

/// Macro to implement the Action trait for a three-variant enum.
///
/// Variants are listed in index order.
#[macro_export]
macro_rules! impl_action {
    ($type:ident { $a:ident, $b:ident, $c:ident }) => {
        impl $crate::cfr::game::Action for $type {
            const ALL: [Self; $crate::cfr::game::NUM_ACTIONS] =
                [$type::$a, $type::$b, $type::$c];

            fn index(self) -> usize {
                match self {
                    $type::$a => 0,
                    $type::$b => 1,
                    $type::$c => 2,
                }
            }

            fn name(&self) -> String {
                format!("{:?}", self)
            }
        }
    };
}
