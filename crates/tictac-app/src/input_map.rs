//! Click handling: window position to layout point to game action.

use tictac_core::{Game, Outcome};
use tictac_engine::coords::{Vec2, Viewport};

use crate::layout::Layout;

/// What a primary-button press asks the game to do.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ClickAction {
    Restart,
    Place { row: usize, col: usize },
}

/// Converts a top-left-origin window position (logical px) into layout space.
///
/// The projection is fixed to the layout size, so a resized window shows the
/// scene stretched; the point is scaled back by the same factor.
pub fn to_layout(layout: &Layout, window: Viewport, point: Vec2) -> Option<Vec2> {
    window.map_point_flipped(point, layout.size)
}

/// Hit-tests a layout-space point against the restart button and the board.
///
/// The button is checked first, edges included, so a finished game can always
/// be restarted. Board cells use half-open bounds so a grid line belongs to
/// one cell only.
/// Clicks on a finished board, on an occupied cell or outside every target
/// map to `None`.
pub fn map_click(layout: &Layout, game: &Game, point: Vec2) -> Option<ClickAction> {
    if layout.button.contains_closed(point) {
        return Some(ClickAction::Restart);
    }

    if game.is_over() {
        log::debug!("click at ({:.1}, {:.1}) ignored: game is over", point.x, point.y);
        return None;
    }

    let (row, col) = layout.cell_at(point)?;
    if game.cell(row, col).is_some_and(|c| c.is_empty()) {
        Some(ClickAction::Place { row, col })
    } else {
        log::debug!("click on occupied cell ({row}, {col}) ignored");
        None
    }
}

/// Applies a mapped click to the game.
pub fn apply_click(game: &mut Game, action: ClickAction) {
    match action {
        ClickAction::Restart => {
            game.reset();
            let score = game.score();
            log::info!("new round (score X {} - O {})", score.x, score.o);
        }
        ClickAction::Place { row, col } => {
            let mover = game.turn();
            match game.apply_move(row, col) {
                Ok(outcome) => {
                    log::debug!("{mover} placed at ({row}, {col})");
                    match outcome {
                        Outcome::InProgress => {}
                        Outcome::Win(mark) => match game.winning_line() {
                            Some(line) => log::info!("player {mark} wins on {line:?}"),
                            None => log::info!("player {mark} wins"),
                        },
                        Outcome::Draw => log::info!("round ends in a draw"),
                    }
                }
                Err(e) => log::debug!("move rejected: {e}"),
            }
        }
    }
}

/// Maps and applies one click. Returns the action taken, if any.
pub fn handle_click(layout: &Layout, game: &mut Game, point: Vec2) -> Option<ClickAction> {
    let action = map_click(layout, game, point)?;
    apply_click(game, action);
    Some(action)
}
