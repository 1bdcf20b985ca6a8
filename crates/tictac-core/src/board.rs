use std::fmt;

/// Number of rows (and columns) on the board.
pub const BOARD_DIM: usize = 3;

/// A player's mark. X always moves first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Mark {
    #[default]
    X,
    O,
}

impl Mark {
    /// Returns the other player's mark.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(m) => Some(m),
        }
    }
}

/// 3x3 grid indexed by `(row, col)`.
///
/// Row 0 is the bottom row on screen; the board itself has no notion of
/// orientation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Board {
    cells: [[Cell; BOARD_DIM]; BOARD_DIM],
}

impl Board {
    #[inline]
    pub const fn new() -> Self {
        Self { cells: [[Cell::Empty; BOARD_DIM]; BOARD_DIM] }
    }

    /// Returns the cell at `(row, col)`, or `None` when out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Writes a cell. Callers must have range-checked `row`/`col`.
    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Sets every cell to [`Cell::Empty`].
    #[inline]
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; BOARD_DIM]; BOARD_DIM];
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    /// Number of non-empty cells.
    pub fn marks_placed(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    /// Iterates `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &cell)| (r, c, cell)))
    }

    /// Builds a board from row-major text such as `"XOX/XOO/OXX"`.
    ///
    /// `X`/`O` place marks, `.` or `-` leave a cell empty; `/` and whitespace
    /// are separators. Returns `None` unless exactly nine cells are given.
    pub fn from_rows(s: &str) -> Option<Self> {
        let mut board = Board::new();
        let mut i = 0usize;
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Marked(Mark::X),
                'O' | 'o' => Cell::Marked(Mark::O),
                '.' | '-' => Cell::Empty,
                '/' => continue,
                c if c.is_whitespace() => continue,
                _ => return None,
            };
            if i >= BOARD_DIM * BOARD_DIM {
                return None;
            }
            board.set(i / BOARD_DIM, i % BOARD_DIM, cell);
            i += 1;
        }
        (i == BOARD_DIM * BOARD_DIM).then_some(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                f.write_str("/")?;
            }
            for cell in row {
                match cell {
                    Cell::Empty => f.write_str(".")?,
                    Cell::Marked(m) => write!(f, "{m}")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let b = Board::new();
        assert_eq!(b.marks_placed(), 0);
        assert!(!b.is_full());
        assert!(b.iter().all(|(_, _, c)| c.is_empty()));
    }

    #[test]
    fn get_out_of_range_is_none() {
        let b = Board::new();
        assert_eq!(b.get(3, 0), None);
        assert_eq!(b.get(0, 3), None);
        assert_eq!(b.get(2, 2), Some(Cell::Empty));
    }

    #[test]
    fn from_rows_round_trips_through_display() {
        let b = Board::from_rows("XOX/XOO/OXX").unwrap();
        assert_eq!(b.get(0, 0), Some(Cell::Marked(Mark::X)));
        assert_eq!(b.get(1, 2), Some(Cell::Marked(Mark::O)));
        assert!(b.is_full());
        assert_eq!(b.to_string(), "XOX/XOO/OXX");
    }

    #[test]
    fn from_rows_rejects_wrong_length() {
        assert!(Board::from_rows("XOX/XO").is_none());
        assert!(Board::from_rows("XOX/XOO/OXX/X").is_none());
        assert!(Board::from_rows("XOX/XQO/OXX").is_none());
    }

    #[test]
    fn clear_empties_every_cell() {
        let mut b = Board::from_rows("XO./.X./..O").unwrap();
        assert_eq!(b.marks_placed(), 4);
        b.clear();
        assert_eq!(b, Board::new());
    }

    #[test]
    fn opponent_alternates() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }
}
