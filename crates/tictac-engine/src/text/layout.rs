use super::FontAtlas;

/// Placement of one glyph bitmap in layout space (bottom-left origin).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlyphQuad {
    pub code: u8,
    /// Bottom-left corner of the quad.
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Result of laying out one line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineLayout {
    pub quads: Vec<GlyphQuad>,
    /// Pen x after the last character.
    pub pen_x: f32,
    /// Characters with no glyph in the atlas. They emit nothing and do not
    /// move the pen.
    pub skipped: usize,
}

/// Lays `text` out left to right starting at pen `(x, y)` on the baseline.
///
/// Each glyph quad sits at `x + bearing_x * scale`, `y + (bearing_y - h) *
/// scale`, sized `w * scale` by `h * scale`; the pen then moves by
/// `advance * scale`. Blank glyphs advance without a quad.
pub fn layout_line(atlas: &FontAtlas, text: &str, x: f32, y: f32, scale: f32) -> LineLayout {
    let mut out = LineLayout {
        quads: Vec::with_capacity(text.len()),
        pen_x: x,
        skipped: 0,
    };

    for ch in text.chars() {
        let Some(g) = atlas.glyph(ch) else {
            out.skipped += 1;
            continue;
        };

        if !g.is_blank() {
            out.quads.push(GlyphQuad {
                code: ch as u8,
                x: out.pen_x + g.bearing_x as f32 * scale,
                y: y + (g.bearing_y - g.height as i32) as f32 * scale,
                w: g.width as f32 * scale,
                h: g.height as f32 * scale,
            });
        }
        out.pen_x += g.advance * scale;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{Glyph, ATLAS_PIXEL_HEIGHT};

    fn atlas() -> FontAtlas {
        let mut a = FontAtlas::empty(ATLAS_PIXEL_HEIGHT);
        // 'A': 20x30 bitmap sitting on the baseline.
        a.insert('A', Glyph::new(20, 30, 2, 30, 24.0, vec![0; 600]));
        // 'g': descender, 18x28 with 8px below the baseline.
        a.insert('g', Glyph::new(18, 28, 1, 20, 22.0, vec![0; 504]));
        a.insert(' ', Glyph::new(0, 0, 0, 0, 12.0, Vec::new()));
        a
    }

    #[test]
    fn pen_advances_by_scaled_advance() {
        let l = layout_line(&atlas(), "AA", 100.0, 50.0, 0.5);
        assert_eq!(l.quads.len(), 2);
        assert_eq!(l.quads[0].x, 101.0);
        assert_eq!(l.quads[1].x, 113.0);
        assert_eq!(l.pen_x, 124.0);
    }

    #[test]
    fn bearing_places_descender_below_baseline() {
        let l = layout_line(&atlas(), "Ag", 0.0, 100.0, 1.0);
        let a = l.quads[0];
        let g = l.quads[1];
        assert_eq!((a.y, a.w, a.h), (100.0, 20.0, 30.0));
        assert_eq!(g.y, 92.0);
        assert_eq!(g.x, 24.0 + 1.0);
        assert_eq!(g.y + g.h, 120.0);
    }

    #[test]
    fn blank_glyph_advances_without_quad() {
        let l = layout_line(&atlas(), "A A", 0.0, 0.0, 1.0);
        assert_eq!(l.quads.len(), 2);
        assert_eq!(l.quads[1].x, 24.0 + 12.0 + 2.0);
        assert_eq!(l.skipped, 0);
    }

    #[test]
    fn unknown_chars_are_skipped_without_advance() {
        let l = layout_line(&atlas(), "AéA", 0.0, 0.0, 1.0);
        assert_eq!(l.skipped, 1);
        assert_eq!(l.quads.len(), 2);
        assert_eq!(l.quads[1].x, 24.0 + 2.0);
        assert_eq!(l.pen_x, 48.0);
    }

    #[test]
    fn empty_text_lays_out_nothing() {
        let l = layout_line(&atlas(), "", 7.0, 3.0, 0.7);
        assert!(l.quads.is_empty());
        assert_eq!(l.pen_x, 7.0);
    }
}
