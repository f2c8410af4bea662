//! Game implementations for the CFR trainer.
//!
//! Games here serve as:
//!
//! 1. **Validation**: Games with known Nash equilibria verify that the CFR
//!    implementation is correct.
//!
//! 2. **Examples**: Demonstrate how to implement the `Game` trait for new games.
//!
//! 3. **Benchmarks**: Provide standardized games for performance testing.
//!
//! ## Available Games
//!
//! - [`rps`]: Rock-Paper-Scissors, with the uniform mixed equilibrium
//!
//! ## Adding New Games
//!
//! 1. Create a new module under `src/games/`
//! 2. Define a three-variant action enum and implement `Action` (see `impl_action!`)
//! 3. Implement the `Game` trait with a payoff for every pair of actions
//! 4. Add tests that verify expected behavior
//!
//! See the [`rps`] module for a complete example.

pub mod rps;
