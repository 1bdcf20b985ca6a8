use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Circle outline payload (stroke only, never filled).
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub stroke_width: f32,
    pub color: Color,
}

impl DrawList {
    /// Records a circle outline.
    #[inline]
    pub fn push_circle(&mut self, center: Vec2, radius: f32, stroke_width: f32, color: Color) {
        self.push(DrawCmd::Circle(CircleCmd { center, radius, stroke_width, color }));
    }
}
