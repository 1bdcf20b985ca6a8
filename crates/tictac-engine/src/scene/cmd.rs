use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::text::TextCmd;

/// One recorded draw, in layout space.
///
/// Each shape has its payload and `DrawList::push_*` helper in its own module
/// under `scene::shapes`. `PrimitiveRenderer` draws the flat shapes and
/// `TextRenderer` draws `Text`; each skips what the other handles.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Line(LineCmd),
    Circle(CircleCmd),
    Text(TextCmd),
}
