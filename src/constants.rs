//! Constants for board geometry, search parameters, and evaluator weights.
//!
//! The board is stored as a 1D array with a one-cell border of
//! out-of-bounds sentinels, so neighbor scans never need a bounds check.
//!
//! # Board Size Configuration
//!
//! The board size is controlled by Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//!
//! ```sh
//! cargo build                                               # 9x9 (default)
//! cargo build --no-default-features --features board13x13   # 13x13
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Playable board size (NxN).
#[cfg(feature = "board9x9")]
pub const N: usize = 9;

#[cfg(feature = "board13x13")]
pub const N: usize = 13;

#[cfg(all(feature = "board9x9", feature = "board13x13"))]
compile_error!("Cannot enable both 'board9x9' and 'board13x13' features at the same time");

#[cfg(not(any(feature = "board9x9", feature = "board13x13")))]
compile_error!("Must enable exactly one board size feature: 'board9x9' or 'board13x13'");

/// Width of the sentinel border on each side of the playable area.
pub const BORDER: usize = 1;

/// Padded board width (N plus the border on both sides).
pub const W: usize = N + 2 * BORDER;

/// Total number of cells including the border.
pub const BOARDSIZE: usize = W * W;

/// Smallest interior coordinate on either axis.
pub const COORD_MIN: usize = BORDER;

/// Largest interior coordinate on either axis.
pub const COORD_MAX: usize = N;

/// Offsets to the four orthogonal neighbors in the 1D array.
/// Order: North, East, South, West
pub const DELTA: [isize; 4] = [-(W as isize), 1, W as isize, -1];

// =============================================================================
// Special Move Values
// =============================================================================

/// "No move" sentinel returned by the search when the side to move has no
/// legal placement. (0, 0) is a border cell, so it can never be played.
pub const NO_MOVE: (usize, usize) = (0, 0);

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search depth in plies.
pub const DEFAULT_SEARCH_DEPTH: u32 = 4;

/// Base magnitude of a decided game. Always larger than any heuristic score.
pub const WIN_SCORE: i32 = 1_000_000;

// =============================================================================
// Evaluator Weights
// =============================================================================

/// Weight of (own legal moves - opponent legal moves).
pub const MOBILITY_WEIGHT: i32 = 4;

/// Weight of (own total liberties - opponent total liberties).
pub const LIBERTY_WEIGHT: i32 = 1;

// =============================================================================
// Game Clock
// =============================================================================

/// Per-move time limit enforced by the front end's countdown.
pub const MOVE_TIME_LIMIT_SECS: u64 = 30;
