//! Constants for board geometry, scoring sentinels, and agent parameters.
//!
//! The board is a fixed 9x6 grid stored as a flat row-major array of 54
//! signed counts. The sign of an entry encodes the owner (positive for
//! player 0, negative for player 1, zero for an unclaimed cell) and the
//! magnitude encodes the number of orbs the cell holds.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of rows on the grid.
pub const ROWS: usize = 9;

/// Number of columns on the grid.
pub const COLS: usize = 6;

/// Total number of cells.
pub const CELLS: usize = ROWS * COLS;

/// Critical mass per cell: the orb count at which a cell explodes.
///
/// Corners explode at 2, other border cells at 3, interior cells at 4.
/// The table is laid out row-major to match the board array.
pub const CRITICAL_MASS: [i32; CELLS] = [
    2, 3, 3, 3, 3, 2, //
    3, 4, 4, 4, 4, 3, //
    3, 4, 4, 4, 4, 3, //
    3, 4, 4, 4, 4, 3, //
    3, 4, 4, 4, 4, 3, //
    3, 4, 4, 4, 4, 3, //
    3, 4, 4, 4, 4, 3, //
    3, 4, 4, 4, 4, 3, //
    2, 3, 3, 3, 3, 2, //
];

// =============================================================================
// Propagation
// =============================================================================

/// Capacity of the per-interaction reaction queue.
///
/// Pending explosion checks stay far below this on a 54-cell grid; the
/// original engine got by with 100 and no guard. Running out is reported
/// as an error rather than corrupting the cascade.
pub const QUEUE_CAPACITY: usize = 1024;

// =============================================================================
// Search Scores
// =============================================================================

/// Score of a branch where the searching player wins.
pub const WIN_SCORE: i32 = 10_000;

/// Score of a branch where the searching player loses.
pub const LOSS_SCORE: i32 = -10_000;

// =============================================================================
// Minimax Agent Parameters
// =============================================================================

/// Default search depth. Depth 1 searches three plies (max, min, eval);
/// every increment adds another max and min level.
pub const DEFAULT_DEPTH: u32 = 1;

/// Default number of top-scored moves the agent picks among at random.
pub const DEFAULT_RANDOMNESS: usize = 3;

/// Maximum randomness. Picking among more moves cripples the agent.
pub const MAX_RANDOMNESS: usize = 5;

/// Selection weights for the top-scored moves, best first.
pub const RANDOM_WEIGHTS: [u32; MAX_RANDOMNESS] = [6, 4, 2, 1, 1];

// =============================================================================
// MCTS Agent Parameters
// =============================================================================

/// Default wall-clock budget per move, in seconds.
pub const DEFAULT_TIME_LIMIT: f64 = 2.0;

/// Default exploration constant for tree selection.
pub const DEFAULT_C_PARAM: f64 = 1.4;
