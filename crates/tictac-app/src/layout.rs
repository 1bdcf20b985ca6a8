//! Fixed 800x600 layout. Every position is in layout space: bottom-left
//! origin, one unit per logical pixel of an unscaled window.

use tictac_core::BOARD_DIM;
use tictac_engine::coords::{Rect, Vec2, Viewport};

pub const LAYOUT_WIDTH: f32 = 800.0;
pub const LAYOUT_HEIGHT: f32 = 600.0;

pub const BOARD_SIZE: f32 = 450.0;
pub const CELL_SIZE: f32 = BOARD_SIZE / BOARD_DIM as f32;
pub const BOARD_X: f32 = (LAYOUT_WIDTH - BOARD_SIZE) / 2.0;
pub const BOARD_Y: f32 = (LAYOUT_HEIGHT - BOARD_SIZE) / 2.0 - 30.0;

/// A text line: baseline pen start plus scale against the atlas height.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextSlot {
    pub origin: Vec2,
    pub scale: f32,
}

/// Geometry of every element drawn by the game.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Layout {
    pub size: Viewport,
    pub board: Rect,
    pub cell_size: f32,
    pub grid_line_width: f32,
    /// Gap between a cell edge and the mark drawn in it.
    pub symbol_padding: f32,
    pub symbol_stroke: f32,
    pub button: Rect,
    pub button_label: TextSlot,
    pub score: TextSlot,
    pub status: TextSlot,
}

impl Layout {
    pub const fn standard() -> Self {
        Self {
            size: Viewport::new(LAYOUT_WIDTH, LAYOUT_HEIGHT),
            board: Rect::new(BOARD_X, BOARD_Y, BOARD_SIZE, BOARD_SIZE),
            cell_size: CELL_SIZE,
            grid_line_width: 10.0,
            symbol_padding: 25.0,
            symbol_stroke: 15.0,
            button: Rect::new(300.0, 530.0, 200.0, 50.0),
            button_label: TextSlot { origin: Vec2::new(325.0, 548.0), scale: 0.5 },
            score: TextSlot { origin: Vec2::new(20.0, 570.0), scale: 0.5 },
            status: TextSlot { origin: Vec2::new(280.0, 80.0), scale: 0.7 },
        }
    }

    /// Bounds of cell `(row, col)`. Row 0 is the bottom row.
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let min = self.board.min();
        Rect::new(
            min.x + col as f32 * self.cell_size,
            min.y + row as f32 * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }

    /// Cell under `p`, if `p` is on the board.
    pub fn cell_at(&self, p: Vec2) -> Option<(usize, usize)> {
        if !self.board.contains(p) {
            return None;
        }
        let min = self.board.min();
        let col = ((p.x - min.x) / self.cell_size).floor() as usize;
        let row = ((p.y - min.y) / self.cell_size).floor() as usize;
        Some((row.min(BOARD_DIM - 1), col.min(BOARD_DIM - 1)))
    }

    /// Interior grid lines as `(from, to)` pairs: verticals first.
    pub fn grid_lines(&self) -> [(Vec2, Vec2); 4] {
        let min = self.board.min();
        let max = self.board.max();
        let x1 = min.x + self.cell_size;
        let x2 = min.x + 2.0 * self.cell_size;
        let y1 = min.y + self.cell_size;
        let y2 = min.y + 2.0 * self.cell_size;
        [
            (Vec2::new(x1, min.y), Vec2::new(x1, max.y)),
            (Vec2::new(x2, min.y), Vec2::new(x2, max.y)),
            (Vec2::new(min.x, y1), Vec2::new(max.x, y1)),
            (Vec2::new(min.x, y2), Vec2::new(max.x, y2)),
        ]
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::standard()
    }
}
