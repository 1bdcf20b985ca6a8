use crate::board::{Board, Cell, Mark, BOARD_DIM};
use crate::error::MoveError;
use crate::rules::{self, Line};

/// Terminal/non-terminal classification of a board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Win(Mark),
    Draw,
}

impl Outcome {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    #[inline]
    pub const fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(m) => Some(m),
            _ => None,
        }
    }
}

/// Cumulative wins per player. Survives [`Game::reset`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Score {
    pub x: u32,
    pub o: u32,
}

impl Score {
    #[inline]
    pub const fn wins(self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x = self.x.saturating_add(1),
            Mark::O => self.o = self.o.saturating_add(1),
        }
    }
}

/// Complete game state: board, mover, outcome and running score.
///
/// The only mutators are [`apply_move`](Self::apply_move),
/// [`evaluate_outcome`](Self::evaluate_outcome) and [`reset`](Self::reset).
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct Game {
    board: Board,
    turn: Mark,
    outcome: Outcome,
    score: Score,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell at `(row, col)`, `None` when out of range.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    /// Player who places the next mark.
    #[inline]
    pub fn turn(&self) -> Mark {
        self.turn
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Number of marks on the current board.
    #[inline]
    pub fn moves_played(&self) -> usize {
        self.board.marks_placed()
    }

    /// The completed line when the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(&self.board).map(|(_, line)| line)
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// On `Err` nothing changes: board, turn, outcome and score are left as
    /// they were. On success the turn passes to the opponent and the outcome
    /// is re-evaluated; the new outcome is returned.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Outcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if row >= BOARD_DIM || col >= BOARD_DIM {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if !self.board.get(row, col).is_some_and(Cell::is_empty) {
            return Err(MoveError::Occupied { row, col });
        }

        self.board.set(row, col, Cell::Marked(self.turn));
        self.turn = self.turn.opponent();
        Ok(self.evaluate_outcome())
    }

    /// Recomputes the outcome from the board.
    ///
    /// A win is credited to the score only on the transition from
    /// `InProgress`, so repeated calls on a finished board never count twice.
    pub fn evaluate_outcome(&mut self) -> Outcome {
        let next = rules::evaluate(&self.board);
        if !self.outcome.is_terminal() {
            if let Outcome::Win(mark) = next {
                self.score.record_win(mark);
            }
        }
        self.outcome = next;
        next
    }

    /// Starts a new round. The score is kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Mark::X;
        self.outcome = Outcome::InProgress;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut Game, moves: &[(usize, usize)]) {
        for &(r, c) in moves {
            game.apply_move(r, c).unwrap();
        }
    }

    #[test]
    fn new_game_starts_with_x() {
        let g = Game::new();
        assert_eq!(g.turn(), Mark::X);
        assert_eq!(g.outcome(), Outcome::InProgress);
        assert_eq!(g.score(), Score::default());
        assert_eq!(g.moves_played(), 0);
    }

    #[test]
    fn each_move_places_one_mark_and_alternates_turn() {
        let mut g = Game::new();
        let moves = [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1), (2, 1)];
        let mut expected = Mark::X;
        for (i, &(r, c)) in moves.iter().enumerate() {
            assert_eq!(g.turn(), expected);
            g.apply_move(r, c).unwrap();
            assert_eq!(g.moves_played(), i + 1);
            assert_eq!(g.cell(r, c), Some(Cell::Marked(expected)));
            expected = expected.opponent();
        }
        assert_eq!(g.turn(), expected);
    }

    #[test]
    fn x_wins_top_row() {
        let mut g = Game::new();
        play(&mut g, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        assert_eq!(g.outcome(), Outcome::Win(Mark::X));
        assert_eq!(g.score(), Score { x: 1, o: 0 });
        assert_eq!(g.winning_line(), Some([(0, 0), (0, 1), (0, 2)]));
    }

    #[test]
    fn o_win_is_credited_to_o() {
        let mut g = Game::new();
        play(&mut g, &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);
        assert_eq!(g.outcome(), Outcome::Win(Mark::O));
        assert_eq!(g.score(), Score { x: 0, o: 1 });
    }

    #[test]
    fn alternating_fill_ends_in_draw() {
        // X O X / X O O / O X X
        let mut g = Game::new();
        play(
            &mut g,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(g.board().to_string(), "XOX/XOO/OXX");
        assert_eq!(g.outcome(), Outcome::Draw);
        assert_eq!(g.score(), Score::default());
    }

    #[test]
    fn evaluate_outcome_is_idempotent() {
        let mut g = Game::new();
        play(&mut g, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        let first = g.outcome();
        let score = g.score();
        assert_eq!(g.evaluate_outcome(), first);
        assert_eq!(g.evaluate_outcome(), first);
        assert_eq!(g.score(), score);
    }

    #[test]
    fn occupied_cell_is_a_no_op() {
        let mut g = Game::new();
        g.apply_move(1, 1).unwrap();
        let before = g.clone();
        assert_eq!(g.apply_move(1, 1), Err(MoveError::Occupied { row: 1, col: 1 }));
        assert_eq!(g, before);
    }

    #[test]
    fn out_of_bounds_is_a_no_op() {
        let mut g = Game::new();
        let before = g.clone();
        assert_eq!(g.apply_move(3, 0), Err(MoveError::OutOfBounds { row: 3, col: 0 }));
        assert_eq!(g.apply_move(0, 7), Err(MoveError::OutOfBounds { row: 0, col: 7 }));
        assert_eq!(g, before);
    }

    #[test]
    fn finished_game_rejects_moves() {
        let mut g = Game::new();
        play(&mut g, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        let before = g.clone();
        assert_eq!(g.apply_move(2, 0), Err(MoveError::GameOver));
        assert_eq!(g, before);
    }

    #[test]
    fn reset_keeps_score() {
        let mut g = Game::new();
        play(&mut g, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        g.reset();
        assert_eq!(g.board(), &Board::new());
        assert_eq!(g.turn(), Mark::X);
        assert_eq!(g.outcome(), Outcome::InProgress);
        assert_eq!(g.score(), Score { x: 1, o: 0 });
    }

    #[test]
    fn reset_mid_game_keeps_score() {
        let mut g = Game::new();
        play(&mut g, &[(0, 0), (1, 1), (0, 1)]);
        g.reset();
        assert_eq!(g.moves_played(), 0);
        assert_eq!(g.turn(), Mark::X);
        assert_eq!(g.score(), Score::default());
    }

    #[test]
    fn scores_accumulate_across_rounds() {
        let mut g = Game::new();
        play(&mut g, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        g.reset();
        play(&mut g, &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);
        g.reset();
        play(&mut g, &[(2, 0), (0, 0), (2, 1), (0, 1), (2, 2)]);
        assert_eq!(g.score(), Score { x: 2, o: 1 });
        assert_eq!(g.score().wins(Mark::X), 2);
    }
}
