//! Static position evaluation.
//!
//! A NoGo position is good for a player who has more places left to play
//! than the opponent, and whose groups breathe more freely. The score is a
//! weighted sum of both differentials, always from `color`'s perspective.

use crate::board::{Board, Color};
use crate::constants::{LIBERTY_WEIGHT, MOBILITY_WEIGHT};
use crate::group::total_liberties;
use crate::rules::count_legal_moves;

/// Tunable evaluator weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalWeights {
    /// Multiplier for the legal-move differential.
    pub mobility: i32,
    /// Multiplier for the total-liberty differential.
    pub liberty: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            mobility: MOBILITY_WEIGHT,
            liberty: LIBERTY_WEIGHT,
        }
    }
}

/// Heuristic value of `board` for `color`. Higher is better for `color`.
pub fn score(board: &Board, color: Color, weights: &EvalWeights) -> i32 {
    let opp = color.opponent();
    let mobility = count_legal_moves(board, color) as i32 - count_legal_moves(board, opp) as i32;
    let liberties = total_liberties(board, color) as i32 - total_liberties(board, opp) as i32;
    weights.mobility * mobility + weights.liberty * liberties
}
