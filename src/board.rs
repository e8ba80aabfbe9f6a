//! Board representation with a sentinel border.
//!
//! Cells live in a 1D array of `W * W` entries. The outermost ring is
//! [`Cell::OutOfBounds`] and is never written by gameplay, so any interior
//! point can look at its four neighbors without checking coordinates.
//! Interior coordinates run from [`COORD_MIN`] to [`COORD_MAX`] on both axes;
//! `x` is the column and `y` the row, row 1 at the top.

use std::fmt;

use crate::constants::{BOARDSIZE, COORD_MAX, COORD_MIN, DELTA, N, W};
use crate::error::RecordError;

/// A point on the board, as an index into the padded 1D array.
pub type Point = usize;

/// Stone color. Black moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Digit used by the persisted record (1 = Black, 2 = White).
    pub fn digit(self) -> u8 {
        match self {
            Color::Black => 1,
            Color::White => 2,
        }
    }

    pub fn from_digit(d: u8) -> Option<Color> {
        match d {
            1 => Some(Color::Black),
            2 => Some(Color::White),
            _ => None,
        }
    }

    /// Parse "b", "black", "w", "white" (case-insensitive).
    pub fn parse(s: &str) -> Option<Color> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Some(Color::Black),
            "w" | "white" => Some(Color::White),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Contents of one cell of the padded grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
    OutOfBounds,
}

impl Cell {
    pub fn stone(color: Color) -> Cell {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }

    /// The stone color in this cell, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
            _ => None,
        }
    }

    /// Record digit: 0 empty, 1 black, 2 white, 3 out of bounds.
    pub fn digit(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
            Cell::OutOfBounds => 3,
        }
    }

    pub fn from_digit(d: u8) -> Option<Cell> {
        match d {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Black),
            2 => Some(Cell::White),
            3 => Some(Cell::OutOfBounds),
            _ => None,
        }
    }
}

/// Index of (x, y) in the padded array. Both coordinates must be `< W`.
#[inline]
pub fn point(x: usize, y: usize) -> Point {
    y * W + x
}

/// Inverse of [`point`].
#[inline]
pub fn coords(pt: Point) -> (usize, usize) {
    (pt % W, pt / W)
}

/// True if (x, y) lies in the playable N x N area.
#[inline]
pub fn is_interior(x: usize, y: usize) -> bool {
    (COORD_MIN..=COORD_MAX).contains(&x) && (COORD_MIN..=COORD_MAX).contains(&y)
}

/// Orthogonal neighbors (N, E, S, W) of an interior point.
#[inline]
pub fn neighbors(pt: Point) -> [Point; 4] {
    std::array::from_fn(|i| (pt as isize + DELTA[i]) as usize)
}

/// Every interior point in row-major order: rows top to bottom, then
/// columns left to right.
pub fn interior_points() -> impl Iterator<Item = Point> {
    (COORD_MIN..=COORD_MAX)
        .flat_map(|y| (COORD_MIN..=COORD_MAX).map(move |x| point(x, y)))
}

/// The board: single source of truth for stone positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARDSIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board: interior Empty, border OutOfBounds.
    pub fn new() -> Self {
        let mut cells = [Cell::OutOfBounds; BOARDSIZE];
        for pt in interior_points() {
            cells[pt] = Cell::Empty;
        }
        Board { cells }
    }

    /// Cell at (x, y). Anything outside the padded grid reads as
    /// out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x >= W || y >= W {
            return Cell::OutOfBounds;
        }
        self.cells[point(x, y)]
    }

    #[inline]
    pub fn at(&self, pt: Point) -> Cell {
        self.cells[pt]
    }

    /// Put a stone on an empty interior cell.
    ///
    /// Callers must have checked legality first; placing on a non-empty cell
    /// is a bug, not a game outcome.
    pub fn place(&mut self, x: usize, y: usize, color: Color) {
        debug_assert!(
            self.get(x, y) == Cell::Empty,
            "place({x}, {y}) on non-empty cell {:?}",
            self.get(x, y)
        );
        self.cells[point(x, y)] = Cell::stone(color);
    }

    /// Write a raw cell. Only used when rebuilding a board from a record.
    pub(crate) fn set_raw(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells[point(x, y)] = cell;
    }

    /// Number of stones on the board.
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.color().is_some()).count()
    }

    /// Parse a diagram as printed by the `Display` impl: `X` black,
    /// `O` white, `.` empty, one row per line, whitespace ignored.
    pub fn from_diagram(diagram: &str) -> Result<Board, RecordError> {
        let symbols: Vec<char> = diagram.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != N * N {
            return Err(RecordError::DiagramLength {
                expected: N * N,
                found: symbols.len(),
            });
        }
        let mut board = Board::new();
        for (pt, &ch) in interior_points().zip(symbols.iter()) {
            let cell = match ch {
                'X' | 'x' => Cell::Black,
                'O' | 'o' => Cell::White,
                '.' => Cell::Empty,
                other => return Err(RecordError::DiagramSymbol(other)),
            };
            board.cells[pt] = cell;
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in COORD_MIN..=COORD_MAX {
            for x in COORD_MIN..=COORD_MAX {
                let ch = match self.get(x, y) {
                    Cell::Black => 'X',
                    Cell::White => 'O',
                    Cell::Empty => '.',
                    Cell::OutOfBounds => '#',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_border_and_interior() {
        let board = Board::new();
        for y in 0..W {
            for x in 0..W {
                let expected = if is_interior(x, y) {
                    Cell::Empty
                } else {
                    Cell::OutOfBounds
                };
                assert_eq!(board.get(x, y), expected, "cell ({x}, {y})");
            }
        }
        assert_eq!(board.stone_count(), 0);
    }

    #[test]
    fn test_get_out_of_range_is_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.get(W, 1), Cell::OutOfBounds);
        assert_eq!(board.get(1, W + 5), Cell::OutOfBounds);
        assert_eq!(board.get(usize::MAX, 0), Cell::OutOfBounds);
    }

    #[test]
    fn test_place_and_copy_are_independent() {
        let mut board = Board::new();
        board.place(3, 4, Color::Black);
        let mut copy = board;
        copy.place(5, 5, Color::White);

        assert_eq!(board.get(3, 4), Cell::Black);
        assert_eq!(board.get(5, 5), Cell::Empty);
        assert_eq!(copy.get(5, 5), Cell::White);
        assert_eq!(board.stone_count(), 1);
        assert_eq!(copy.stone_count(), 2);
    }

    #[test]
    fn test_point_coords_roundtrip() {
        for pt in interior_points() {
            let (x, y) = coords(pt);
            assert!(is_interior(x, y));
            assert_eq!(point(x, y), pt);
        }
        assert_eq!(interior_points().count(), N * N);
    }

    #[test]
    fn test_interior_points_row_major() {
        let pts: Vec<_> = interior_points().take(N + 1).map(coords).collect();
        assert_eq!(pts[0], (1, 1));
        assert_eq!(pts[1], (2, 1));
        assert_eq!(pts[N], (1, 2));
    }

    #[test]
    fn test_neighbors_of_corner_touch_border() {
        let board = Board::new();
        let out = neighbors(point(1, 1))
            .iter()
            .filter(|&&n| board.at(n) == Cell::OutOfBounds)
            .count();
        assert_eq!(out, 2);
    }

    #[test]
    fn test_diagram_roundtrip() {
        let mut board = Board::new();
        board.place(1, 1, Color::Black);
        board.place(N, N, Color::White);
        let parsed = Board::from_diagram(&board.to_string()).unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_diagram_errors() {
        assert!(matches!(
            Board::from_diagram("X O ."),
            Err(RecordError::DiagramLength { found: 3, .. })
        ));
        let bad = "?".repeat(N * N);
        assert!(matches!(
            Board::from_diagram(&bad),
            Err(RecordError::DiagramSymbol('?'))
        ));
    }

    #[test]
    fn test_color_helpers() {
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::parse("W"), Some(Color::White));
        assert_eq!(Color::parse("black"), Some(Color::Black));
        assert_eq!(Color::parse("red"), None);
        assert_eq!(Color::from_digit(Color::White.digit()), Some(Color::White));
        assert_eq!(Cell::from_digit(4), None);
        assert_eq!(Cell::stone(Color::Black).color(), Some(Color::Black));
    }
}
