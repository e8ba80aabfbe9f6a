//! Group and liberty analysis.
//!
//! Groups are never stored; every query flood-fills from a stone. With at
//! most N*N cells per fill this is cheap enough for the search to call it
//! on every candidate move.

use crate::board::{Board, Cell, Color, Point, interior_points, neighbors, point};
use crate::constants::BOARDSIZE;

/// A maximal 4-connected set of same-colored stones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub stones: Vec<Point>,
    pub liberties: u32,
}

/// Liberty count of the group containing the stone at (x, y).
///
/// Returns `None` if (x, y) holds no stone.
pub fn group_liberties(board: &Board, x: usize, y: usize) -> Option<u32> {
    board.get(x, y).color()?;
    Some(liberties_at(board, point(x, y)))
}

/// Liberty count of the group containing the stone at `start`.
///
/// `start` must hold a stone.
pub(crate) fn liberties_at(board: &Board, start: Point) -> u32 {
    let mut visited = [false; BOARDSIZE];
    flood(board, start, &mut visited, |_| {})
}

/// Every group of `color`, in row-major order of each group's first stone.
pub fn groups(board: &Board, color: Color) -> Vec<Group> {
    let target = Cell::stone(color);
    let mut visited = [false; BOARDSIZE];
    let mut out = Vec::new();

    for pt in interior_points() {
        if visited[pt] || board.at(pt) != target {
            continue;
        }
        let mut stones = Vec::new();
        let liberties = flood(board, pt, &mut visited, |s| stones.push(s));
        out.push(Group {
            stones,
            liberties,
        });
    }
    out
}

/// Sum of liberty counts over all groups of `color`.
///
/// A cell adjacent to two different groups counts once for each.
pub fn total_liberties(board: &Board, color: Color) -> u32 {
    groups(board, color).iter().map(|g| g.liberties).sum()
}

/// Flood-fill the group at `start`, marking members in `visited` and
/// reporting each one to `on_stone`. Returns the number of distinct empty
/// cells adjacent to the group.
fn flood(
    board: &Board,
    start: Point,
    visited: &mut [bool; BOARDSIZE],
    mut on_stone: impl FnMut(Point),
) -> u32 {
    let color = board.at(start);
    let mut liberty_seen = [false; BOARDSIZE];
    let mut stack = vec![start];
    let mut libs = 0u32;

    while let Some(pt) = stack.pop() {
        if visited[pt] {
            continue;
        }
        visited[pt] = true;
        on_stone(pt);

        for n in neighbors(pt) {
            match board.at(n) {
                Cell::Empty => {
                    if !liberty_seen[n] {
                        liberty_seen[n] = true;
                        libs += 1;
                    }
                }
                c if c == color && !visited[n] => stack.push(n),
                _ => {}
            }
        }
    }
    libs
}
