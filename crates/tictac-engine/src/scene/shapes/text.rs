use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Single-line text payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Pen start on the baseline, layout space.
    pub origin: Vec2,
    /// Multiplier applied to the atlas pixel height.
    pub scale: f32,
    pub color: Color,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(&mut self, text: impl Into<String>, origin: Vec2, scale: f32, color: Color) {
        self.push(DrawCmd::Text(TextCmd {
            text: text.into(),
            origin,
            scale,
            color,
        }));
    }
}
