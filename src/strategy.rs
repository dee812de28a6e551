//! The player contract and a uniform-random baseline player.

use crate::board::{BoardState, Move};

/// A move supplier for one side.
///
/// Given the current position, an implementation returns the move to play
/// for `state.to_move`, or `None` to pass. Passing is never an error: it
/// is the regular answer whenever the mover has no legal moves.
pub trait Strategy {
    /// Short label for match reporting.
    fn name(&self) -> &'static str;

    /// The move to play from `state`, or `None` for a forced pass.
    fn choose_move(&mut self, state: &BoardState) -> Option<Move>;
}

/// Plays a uniformly random legal move. Useful as a sparring baseline and
/// for driving full games in tests.
pub struct RandomStrategy {
    rng: fastrand::Rng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Deterministic variant for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose_move(&mut self, state: &BoardState) -> Option<Move> {
        let moves = state.legal_moves(state.to_move);
        if moves.is_empty() {
            None
        } else {
            Some(moves[self.rng.usize(..moves.len())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_are_legal_and_seed_reproducible() {
        let state = BoardState::new(8);
        let mut a = RandomStrategy::with_seed(11);
        let mut b = RandomStrategy::with_seed(11);
        for _ in 0..8 {
            let mv = a.choose_move(&state);
            assert_eq!(mv, b.choose_move(&state));
            assert!(state.legal_moves(state.to_move).contains(&mv.unwrap()));
        }
    }

    #[test]
    fn passes_on_a_finished_board() {
        let state = BoardState::new(2);
        assert_eq!(RandomStrategy::with_seed(0).choose_move(&state), None);
    }
}
