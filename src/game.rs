//! Self-play driver: runs two strategies against each other to the end.
//!
//! This is the consumer of the [`Strategy`] contract. It alternates
//! `choose_move`/`apply_move`, treats `None` as a forced pass, and stops
//! once neither side can place a disc.

use crate::board::{BoardState, Player};
use crate::strategy::Strategy;

/// Outcome of a finished game.
pub struct GameResult {
    /// Discs placed (passes excluded).
    pub plies: usize,
    /// Forced passes.
    pub passes: usize,
    /// Final disc differential.
    pub score: i32,
    /// `None` on a drawn board.
    pub winner: Option<Player>,
    /// The terminal position.
    pub final_state: BoardState,
}

/// Play `state` to the end, `dark` choosing for `Dark` and `light` for
/// `Light`. With `show_boards` each position is printed after every disc
/// placement.
pub fn play_game(
    mut state: BoardState,
    dark: &mut dyn Strategy,
    light: &mut dyn Strategy,
    show_boards: bool,
) -> GameResult {
    let mut plies = 0;
    let mut passes = 0;
    while !state.is_terminal() {
        let mover = state.to_move;
        let mv = match mover {
            Player::Dark => dark.choose_move(&state),
            Player::Light => light.choose_move(&state),
        };
        state.apply_move(mv);
        match mv {
            Some(mv) => {
                plies += 1;
                if show_boards {
                    println!("{mover} plays {mv}");
                    println!("{state}");
                }
            }
            None => {
                passes += 1;
                if show_boards {
                    println!("{mover} passes");
                }
            }
        }
    }
    let score = state.score();
    let winner = match score {
        s if s > 0 => Some(Player::Dark),
        s if s < 0 => Some(Player::Light),
        _ => None,
    };
    GameResult {
        plies,
        passes,
        score,
        winner,
        final_state: state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::RandomStrategy;

    #[test]
    fn random_self_play_terminates_consistently() {
        let mut dark = RandomStrategy::with_seed(1);
        let mut light = RandomStrategy::with_seed(2);
        let result = play_game(BoardState::new(6), &mut dark, &mut light, false);
        assert!(result.final_state.is_terminal());
        assert!(result.plies <= 6 * 6 - 4);
        assert_eq!(result.score, result.final_state.score());
        match result.winner {
            Some(Player::Dark) => assert!(result.score > 0),
            Some(Player::Light) => assert!(result.score < 0),
            None => assert_eq!(result.score, 0),
        }
    }

    #[test]
    fn finished_game_is_a_no_op() {
        let mut dark = RandomStrategy::with_seed(3);
        let mut light = RandomStrategy::with_seed(4);
        let result = play_game(BoardState::new(2), &mut dark, &mut light, false);
        assert_eq!(result.plies, 0);
        assert_eq!(result.passes, 0);
        assert_eq!(result.score, 0);
        assert_eq!(result.winner, None);
    }
}
