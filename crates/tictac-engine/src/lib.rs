//! Tic-tac-toe engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the game binary: a single
//! winit window driving a wgpu surface, platform-agnostic input, a fixed 2D
//! orthographic draw stream, and a glyph atlas rasterized with fontdue.

pub mod core;
pub mod device;
pub mod input;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
