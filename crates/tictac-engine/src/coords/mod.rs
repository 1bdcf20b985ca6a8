//! Coordinate and geometry types shared by the renderers and the game layer.
//!
//! Layout space:
//! - fixed logical size (the projection never changes on resize)
//! - origin bottom-left
//! - +X right, +Y up
//!
//! Window space (pointer events) is top-left origin, +Y down, in logical
//! pixels; [`Viewport::map_point_flipped`] converts between the two.

mod ortho;
mod rect;
mod vec2;
mod viewport;

pub use ortho::{ortho, transform_point, Mat4};
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
