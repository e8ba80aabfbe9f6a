//! NoGo placement rules and terminal detection.
//!
//! Nothing is ever captured, so a placement is legal only if, afterwards,
//! every group touching it (the mover's own and each adjacent opposing
//! group) still has at least one liberty. A player with no legal placement
//! loses.

use crate::board::{
    Board, Cell, Color, Point, coords, interior_points, is_interior, neighbors, point,
};
use crate::group::liberties_at;

/// Check whether `color` may place a stone at (x, y).
///
/// Not legal if the cell is outside the playable area or occupied, if the
/// new stone's group would have no liberties, or if any adjacent opposing
/// group would be left without liberties. Never mutates `board`.
pub fn is_legal_move(board: &Board, x: usize, y: usize, color: Color) -> bool {
    if !is_interior(x, y) || board.get(x, y) != Cell::Empty {
        return false;
    }
    is_legal_at(board, point(x, y), color)
}

/// [`is_legal_move`] for an interior empty point.
fn is_legal_at(board: &Board, pt: Point, color: Color) -> bool {
    let mut scratch = *board;
    let (x, y) = coords(pt);
    scratch.place(x, y, color);

    if liberties_at(&scratch, pt) == 0 {
        return false;
    }

    let opp = Cell::stone(color.opponent());
    neighbors(pt)
        .into_iter()
        .filter(|&n| scratch.at(n) == opp)
        .all(|n| liberties_at(&scratch, n) > 0)
}

/// Every legal placement for `color`, in row-major scan order.
pub fn legal_moves(board: &Board, color: Color) -> Vec<(usize, usize)> {
    legal_points(board, color).map(coords).collect()
}

/// Number of legal placements for `color`.
pub fn count_legal_moves(board: &Board, color: Color) -> usize {
    legal_points(board, color).count()
}

/// Does `color` have any legal placement? Stops at the first one found.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    legal_points(board, color).next().is_some()
}

fn legal_points(board: &Board, color: Color) -> impl Iterator<Item = Point> + '_ {
    interior_points()
        .filter(move |&pt| board.at(pt) == Cell::Empty && is_legal_at(board, pt, color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{N, W};

    #[test]
    fn test_center_is_legal_on_empty_board() {
        let board = Board::new();
        assert!(is_legal_move(&board, 5, 5, Color::Black));
        assert_eq!(count_legal_moves(&board, Color::Black), N * N);
        assert!(has_any_legal_move(&board, Color::White));
    }

    #[test]
    fn test_out_of_range_and_occupied_fail_closed() {
        let mut board = Board::new();
        board.place(4, 4, Color::Black);
        assert!(!is_legal_move(&board, 0, 3, Color::Black));
        assert!(!is_legal_move(&board, W, 3, Color::Black));
        assert!(!is_legal_move(&board, 3, N + 1, Color::Black));
        assert!(!is_legal_move(&board, 4, 4, Color::White));
        assert!(!is_legal_move(&board, 4, 4, Color::Black));
    }

    #[test]
    fn test_self_suicide_is_illegal() {
        // White walls off the corner; Black at (1,1) would have no liberties.
        let mut board = Board::new();
        board.place(2, 1, Color::White);
        board.place(1, 2, Color::White);
        assert!(!is_legal_move(&board, 1, 1, Color::Black));
        // For White it joins its own stones and is fine.
        assert!(is_legal_move(&board, 1, 1, Color::White));
    }

    #[test]
    fn test_filling_last_liberty_of_opponent_is_illegal() {
        let mut board = Board::new();
        board.place(3, 2, Color::White);
        board.place(2, 2, Color::Black);
        board.place(4, 2, Color::Black);
        board.place(3, 1, Color::Black);
        assert!(!is_legal_move(&board, 3, 3, Color::Black));
        // White may extend out of atari.
        assert!(is_legal_move(&board, 3, 3, Color::White));
    }

    #[test]
    fn test_legality_check_does_not_mutate() {
        let mut board = Board::new();
        board.place(2, 1, Color::White);
        let before = board;
        let _ = is_legal_move(&board, 1, 1, Color::Black);
        let _ = legal_moves(&board, Color::Black);
        assert_eq!(board, before);
    }

    #[test]
    fn test_legal_moves_order_and_count_agree() {
        let mut board = Board::new();
        board.place(2, 1, Color::White);
        board.place(1, 2, Color::White);
        let moves = legal_moves(&board, Color::Black);
        assert_eq!(moves.len(), count_legal_moves(&board, Color::Black));
        assert!(!moves.contains(&(1, 1)));
        assert_eq!(moves[0], (3, 1));
        assert!(moves.windows(2).all(|w| (w[0].1, w[0].0) < (w[1].1, w[1].0)));
    }

    #[test]
    fn test_no_legal_move_when_every_empty_cell_is_an_eye() {
        let mut board = Board::new();
        for pt in interior_points() {
            let (x, y) = coords(pt);
            if x % 3 != 2 || y % 3 != 2 {
                board.place(x, y, Color::Black);
            }
        }
        assert!(!has_any_legal_move(&board, Color::White));
        assert!(has_any_legal_move(&board, Color::Black));
    }
}
