//! Constants for board geometry and engine parameters.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board side length. The classic game is played on 8x8.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Smallest playable board. Construction clamps anything below this.
pub const MIN_BOARD_SIZE: usize = 2;

/// Offsets of the 8 directions in which discs can be captured.
/// Order: N, NE, E, SE, S, SW, W, NW; the rules code scans them in this order.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

// =============================================================================
// Minimax Parameters
// =============================================================================

/// Default lookahead depth in plies.
pub const DEFAULT_MINIMAX_DEPTH: u32 = 3;

/// Fold identity for the value loops; every reachable disc differential is
/// strictly inside (-SCORE_LIMIT, SCORE_LIMIT).
pub const SCORE_LIMIT: i32 = 1_000_000;

// =============================================================================
// MCTS (Monte Carlo Tree Search) Parameters
// =============================================================================

/// Default number of search iterations per decision.
pub const DEFAULT_ITERATIONS: usize = 100_000;

/// Fraction of descent steps through a fully expanded node that follow the
/// current best child; the remainder pick a uniformly random child.
pub const EXPLOIT_PROBABILITY: f64 = 0.9;
