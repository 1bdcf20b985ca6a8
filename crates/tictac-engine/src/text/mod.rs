//! Glyph atlas and single-line text layout.
//!
//! The atlas is built once on the CPU with fontdue; the text renderer uploads
//! its bitmaps lazily and keeps only the metrics afterwards. Layout is a pure
//! function over the metrics so it can be checked without a GPU.

mod atlas;
mod layout;

pub use atlas::{FontAtlas, FontLoadError, Glyph, ATLAS_PIXEL_HEIGHT, GLYPH_COUNT};
pub use layout::{layout_line, GlyphQuad, LineLayout};
