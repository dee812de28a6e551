//! Reversi-Rust: decision engines for the classic disc-flipping capture
//! game.
//!
//! The crate pairs a complete rules core with two move-selection engines:
//! a depth-limited exhaustive minimax and a Monte Carlo tree search. Both
//! answer the same question, "which move should the side on turn play?",
//! and both answer `None` when the only option is to pass.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry and engine parameters
//! - [`board`] - Game state, legal moves, captures, scoring
//! - [`minimax`] - Fixed-depth exhaustive search
//! - [`mcts`] - Monte Carlo tree search over an arena tree
//! - [`strategy`] - The player contract and a random baseline
//! - [`game`] - Self-play driver
//!
//! ## Example
//!
//! ```
//! use reversi_rust::board::BoardState;
//! use reversi_rust::mcts::{MctsConfig, MonteCarloTreeSearchStrategy};
//! use reversi_rust::strategy::Strategy;
//!
//! let state = BoardState::new(8);
//! let config = MctsConfig {
//!     iterations: 200,
//!     ..Default::default()
//! };
//! let mut engine = MonteCarloTreeSearchStrategy::seeded(config, 42);
//! let chosen = engine.choose_move(&state);
//! assert!(chosen.is_some());
//! ```

pub mod board;
pub mod constants;
pub mod game;
pub mod mcts;
pub mod minimax;
pub mod strategy;
