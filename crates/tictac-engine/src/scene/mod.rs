//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in layout space
//! - preserve insertion order (commands are replayed exactly as recorded)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;

mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::circle::CircleCmd;
pub use shapes::line::LineCmd;
pub use shapes::rect::RectCmd;
pub use shapes::text::TextCmd;
