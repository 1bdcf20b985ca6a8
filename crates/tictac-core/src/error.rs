use std::fmt;

/// Reason a move was not applied.
///
/// A rejected move never changes the game; callers that only care about the
/// no-op semantics can ignore the value.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MoveError {
    /// The game already reached a win or a draw.
    GameOver,
    /// `row` or `col` is outside `0..3`.
    OutOfBounds { row: usize, col: usize },
    /// The target cell already holds a mark.
    Occupied { row: usize, col: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "game is already over"),
            MoveError::OutOfBounds { row, col } => {
                write!(f, "cell ({row}, {col}) is outside the board")
            }
            MoveError::Occupied { row, col } => write!(f, "cell ({row}, {col}) is occupied"),
        }
    }
}

impl std::error::Error for MoveError {}
