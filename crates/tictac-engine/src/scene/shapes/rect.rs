use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Filled rectangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

impl DrawList {
    /// Records a solid rectangle.
    #[inline]
    pub fn push_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCmd::Rect(RectCmd { rect, color }));
    }
}
