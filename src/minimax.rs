//! Depth-limited exhaustive minimax search.
//!
//! Every line is explored to a fixed ply depth with no pruning of any
//! kind, and leaves are scored with the raw disc differential. `Dark` is
//! always the maximizing side and `Light` the minimizing side, whichever
//! of them the strategy is choosing for; the flag alternates strictly by
//! ply.
//!
//! The value computation runs over an explicit frame stack instead of the
//! machine stack, so the native stack depth stays flat no matter how deep
//! the configured lookahead is. Traversal order is the natural
//! depth-first walk in move-generation order.

use crate::board::{BoardState, Move, Player};
use crate::constants::SCORE_LIMIT;
use crate::strategy::Strategy;

/// Fixed-depth minimax player.
pub struct MinimaxStrategy {
    depth: u32,
}

impl MinimaxStrategy {
    pub fn new(depth: u32) -> Self {
        Self { depth }
    }
}

impl Strategy for MinimaxStrategy {
    fn name(&self) -> &'static str {
        "minimax"
    }

    /// Pick the mover's best candidate by searching `depth` plies below
    /// each one.
    ///
    /// Candidate values are compared against a neutral baseline of 0 and
    /// adopted only on strict improvement, so ties keep the earliest move
    /// in generation order. With no candidates the mover passes.
    fn choose_move(&mut self, state: &BoardState) -> Option<Move> {
        let moves = state.legal_moves(state.to_move);
        if moves.is_empty() {
            return None;
        }
        let mut best_index = 0;
        let mut best_value = 0;
        for (i, &mv) in moves.iter().enumerate() {
            let after = state.apply_move_cloning(Some(mv));
            let maximizing = after.to_move == Player::Dark;
            let value = minimax(self.depth, after, maximizing);
            let improved = match state.to_move {
                Player::Dark => value > best_value,
                Player::Light => value < best_value,
            };
            if improved {
                best_value = value;
                best_index = i;
            }
        }
        Some(moves[best_index])
    }
}

/// One frame of the explicit search stack: a position part-way through
/// folding the values of its children.
struct Frame {
    state: BoardState,
    depth: u32,
    maximizing: bool,
    leaf: bool,
    moves: Vec<Move>,
    next: usize,
    value: i32,
}

impl Frame {
    fn new(state: BoardState, depth: u32, maximizing: bool) -> Self {
        let moves = state.legal_moves(state.to_move);
        let leaf = depth == 0 || state.is_terminal();
        let value = if maximizing { -SCORE_LIMIT } else { SCORE_LIMIT };
        Frame {
            state,
            depth,
            maximizing,
            leaf,
            moves,
            next: 0,
            value,
        }
    }
}

/// Minimax value of `state`, `depth` plies deep.
///
/// At depth 0 or on a terminal position this is the raw disc
/// differential. Otherwise it is the max (when `maximizing`) or min of
/// the values one ply down, over every legal move of the side to move. A
/// non-terminal position whose mover has no legal moves folds over
/// nothing and keeps the ±[`SCORE_LIMIT`] identity.
pub fn minimax(depth: u32, state: BoardState, maximizing: bool) -> i32 {
    let mut stack = vec![Frame::new(state, depth, maximizing)];
    loop {
        let frame = stack
            .last_mut()
            .expect("root frame stays until its value is returned");
        if !frame.leaf && frame.next < frame.moves.len() {
            let mv = frame.moves[frame.next];
            frame.next += 1;
            let child_depth = frame.depth - 1;
            let child_maximizing = !frame.maximizing;
            let child = frame.state.apply_move_cloning(Some(mv));
            stack.push(Frame::new(child, child_depth, child_maximizing));
            continue;
        }
        let value = if frame.leaf {
            frame.state.score()
        } else {
            frame.value
        };
        stack.pop();
        let Some(parent) = stack.last_mut() else {
            return value;
        };
        parent.value = if parent.maximizing {
            parent.value.max(value)
        } else {
            parent.value.min(value)
        };
    }
}
