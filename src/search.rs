//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The search never touches the caller's board: every child position is a
//! private copy. Moves are tried in row-major order and a later move only
//! replaces the current best if it is strictly better, so the result is a
//! pure function of (board, side to move, depth, weights).

use tracing::debug;

use crate::board::{Board, Color};
use crate::constants::{NO_MOVE, WIN_SCORE};
use crate::eval::{EvalWeights, score};
use crate::rules::{has_any_legal_move, legal_moves};

/// Bound larger than any reachable value.
const INFINITY: i32 = 2 * WIN_SCORE;

/// Outcome of a search from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub x: usize,
    pub y: usize,
    /// Value from the searching side's perspective.
    pub value: i32,
    /// Nodes visited.
    pub nodes: u64,
}

impl SearchResult {
    /// True if the searching side had no legal move, i.e. it has lost.
    pub fn is_no_move(&self) -> bool {
        (self.x, self.y) == NO_MOVE
    }
}

/// Minimax searcher for one root position.
///
/// Scores are always oriented toward `maximizer`, the side to move at the
/// root.
pub struct AlphaBeta {
    maximizer: Color,
    max_depth: u32,
    weights: EvalWeights,
    nodes: u64,
}

impl AlphaBeta {
    pub fn new(maximizer: Color, max_depth: u32, weights: EvalWeights) -> Self {
        Self {
            maximizer,
            max_depth,
            weights,
            nodes: 0,
        }
    }

    /// Search `board` for the maximizer to the full depth.
    pub fn run(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;
        let ((x, y), value) =
            self.search(board, self.maximizer, -INFINITY, INFINITY, self.max_depth);
        SearchResult {
            x,
            y,
            value,
            nodes: self.nodes,
        }
    }

    /// Value of `board` with `to_move` on turn and `depth` plies left,
    /// together with the best move found (or [`NO_MOVE`] at a leaf).
    ///
    /// A side with no legal move has lost. That is scored as
    /// `WIN_SCORE + depth` against it, so a win found closer to the root
    /// outranks one found deeper.
    pub fn search(
        &mut self,
        board: &Board,
        to_move: Color,
        mut alpha: i32,
        mut beta: i32,
        depth: u32,
    ) -> ((usize, usize), i32) {
        self.nodes += 1;
        let maximizing = to_move == self.maximizer;
        let lost = || {
            let v = WIN_SCORE + depth as i32;
            if maximizing { -v } else { v }
        };

        if depth == 0 {
            if !has_any_legal_move(board, to_move) {
                return (NO_MOVE, lost());
            }
            return (NO_MOVE, score(board, self.maximizer, &self.weights));
        }

        let moves = legal_moves(board, to_move);
        if moves.is_empty() {
            return (NO_MOVE, lost());
        }

        let mut best_move = NO_MOVE;
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for (x, y) in moves {
            let mut child = *board;
            child.place(x, y, to_move);
            let (_, v) = self.search(&child, to_move.opponent(), alpha, beta, depth - 1);

            if maximizing {
                if v > best {
                    best = v;
                    best_move = (x, y);
                }
                alpha = alpha.max(best);
            } else {
                if v < best {
                    best = v;
                    best_move = (x, y);
                }
                beta = beta.min(best);
            }
            if alpha >= beta {
                break;
            }
        }

        (best_move, best)
    }
}

/// Best move for `color` with the default evaluator weights.
pub fn best_move(board: &Board, color: Color, depth: u32) -> SearchResult {
    best_move_with(board, color, depth, EvalWeights::default())
}

/// Best move for `color` searching `depth` plies (at least one).
///
/// Returns the [`NO_MOVE`] sentinel if `color` has no legal move.
pub fn best_move_with(
    board: &Board,
    color: Color,
    depth: u32,
    weights: EvalWeights,
) -> SearchResult {
    let depth = depth.max(1);
    let mut searcher = AlphaBeta::new(color, depth, weights);
    let result = searcher.run(board);
    debug!(
        %color,
        depth,
        nodes = result.nodes,
        value = result.value,
        x = result.x,
        y = result.y,
        "search finished"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{coords, interior_points};

    /// Black on every interior cell except single-point eyes and the
    /// cells picked by `hole`.
    fn black_wall(hole: impl Fn(usize, usize) -> bool) -> Board {
        let mut board = Board::new();
        for pt in interior_points() {
            let (x, y) = coords(pt);
            let eye = x % 3 == 2 && y % 3 == 2;
            if !eye && !hole(x, y) {
                board.place(x, y, Color::Black);
            }
        }
        board
    }

    /// White can never play: every empty cell is a Black eye.
    fn eye_board() -> Board {
        black_wall(|_, _| false)
    }

    /// A two-cell gap at (4,3)-(4,4) where White still has room.
    fn almost_won_board() -> Board {
        black_wall(|x, y| x == 4 && (y == 3 || y == 4))
    }

    /// A wider gap so both sides have a few real choices.
    fn open_board() -> Board {
        black_wall(|x, y| (4..=7).contains(&x) && (3..=4).contains(&y) && x != 5)
    }

    #[test]
    fn test_no_move_sentinel() {
        let board = eye_board();
        let result = best_move(&board, Color::White, 2);
        assert!(result.is_no_move());
        assert_eq!(result.value, -(WIN_SCORE + 2));
    }

    #[test]
    fn test_finds_immediate_win() {
        let board = almost_won_board();
        let result = best_move(&board, Color::Black, 1);
        assert_eq!((result.x, result.y), (4, 3));
        assert_eq!(result.value, WIN_SCORE);
    }

    #[test]
    fn test_prefers_faster_win() {
        let board = almost_won_board();
        let result = best_move(&board, Color::Black, 3);
        assert_eq!((result.x, result.y), (4, 3));
        assert_eq!(result.value, WIN_SCORE + 2);
    }

    #[test]
    fn test_depth_zero_is_clamped() {
        let board = Board::new();
        let result = best_move(&board, Color::Black, 0);
        assert!(!result.is_no_move());
    }

    #[test]
    fn test_search_is_deterministic_and_pure() {
        let board = open_board();
        let before = board;

        let a = best_move(&board, Color::White, 3);
        let b = best_move(&board, Color::White, 3);
        assert_eq!(a, b);
        assert_eq!(board, before);
        assert!(crate::rules::is_legal_move(&board, a.x, a.y, Color::White));
    }

    #[test]
    fn test_pruning_matches_plain_minimax() {
        fn minimax(board: &Board, to_move: Color, me: Color, depth: u32) -> i32 {
            let moves = legal_moves(board, to_move);
            if moves.is_empty() {
                let v = WIN_SCORE + depth as i32;
                return if to_move == me { -v } else { v };
            }
            if depth == 0 {
                return score(board, me, &EvalWeights::default());
            }
            let values = moves.into_iter().map(|(x, y)| {
                let mut child = *board;
                child.place(x, y, to_move);
                minimax(&child, to_move.opponent(), me, depth - 1)
            });
            if to_move == me {
                values.max().unwrap()
            } else {
                values.min().unwrap()
            }
        }

        let opened = open_board();
        let result = best_move(&opened, Color::White, 2);
        assert_eq!(result.value, minimax(&opened, Color::White, Color::White, 2));
    }
}
