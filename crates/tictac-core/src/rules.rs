//! Win and draw detection.

use crate::board::{Board, Cell, Mark};
use crate::game::Outcome;

/// A line of three cells as `(row, col)` pairs.
pub type Line = [(usize, usize); 3];

/// All eight lines, rows and columns first, then both diagonals.
pub const LINES: [Line; 8] = [
    // rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the first line holding three equal marks, with its owner.
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line.map(|(r, col)| board.get(r, col).unwrap_or(Cell::Empty));
        match a {
            Cell::Marked(m) if a == b && b == c => Some((m, line)),
            _ => None,
        }
    })
}

/// Classifies a board. Pure: never touches scores.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, _)) = winning_line(board) {
        Outcome::Win(mark)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
