//! Game state and rules for a two-player 3x3 tic-tac-toe.
//!
//! This crate is dependency-free. It knows nothing about windows, pointers or
//! rendering; the application maps clicks onto [`Game::apply_move`] /
//! [`Game::reset`] and reads the state back every frame.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`board`] | `Mark`, `Cell`, `Board` |
//! | [`rules`] | winning lines and outcome evaluation over a board |
//! | [`game`] | `Game`, `Outcome`, `Score` |
//! | [`error`] | `MoveError` |
//!
//! ```rust
//! use tictac_core::{Game, Mark, Outcome};
//!
//! let mut game = Game::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.apply_move(row, col).unwrap();
//! }
//! assert_eq!(game.outcome(), Outcome::Win(Mark::X));
//! assert_eq!(game.score().x, 1);
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod rules;

pub use board::{Board, Cell, Mark, BOARD_DIM};
pub use error::MoveError;
pub use game::{Game, Outcome, Score};
