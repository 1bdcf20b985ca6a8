use std::fmt;

/// Pixel height every glyph is rasterized at.
pub const ATLAS_PIXEL_HEIGHT: f32 = 48.0;

/// Number of character codes covered by the atlas (`0..GLYPH_COUNT`).
pub const GLYPH_COUNT: usize = 128;

/// Error returned by [`FontAtlas::build`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Metrics and coverage bitmap for one character at the atlas pixel height.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub width: u32,
    pub height: u32,
    /// Pen origin to the left edge of the bitmap.
    pub bearing_x: i32,
    /// Baseline up to the top edge of the bitmap.
    pub bearing_y: i32,
    /// Horizontal pen advance in pixels.
    pub advance: f32,
    /// Row-major coverage, top row first. Emptied once uploaded.
    pub(crate) bitmap: Vec<u8>,
}

impl Glyph {
    pub fn new(
        width: u32,
        height: u32,
        bearing_x: i32,
        bearing_y: i32,
        advance: f32,
        bitmap: Vec<u8>,
    ) -> Self {
        Self { width, height, bearing_x, bearing_y, advance, bitmap }
    }

    /// True when the glyph covers no pixels (e.g. space).
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Glyphs for character codes `0..128`, keyed by code.
///
/// Immutable once built apart from releasing bitmaps after upload.
#[derive(Debug, Clone)]
pub struct FontAtlas {
    pixel_height: f32,
    glyphs: Vec<Option<Glyph>>,
}

impl FontAtlas {
    /// Parses `bytes` and rasterizes every code in `0..128` at `pixel_height`.
    ///
    /// Codes the font has no outline for still get an entry (fontdue maps them
    /// to the notdef glyph), so lookups of any ASCII code succeed.
    pub fn build(bytes: &[u8], pixel_height: f32) -> Result<Self, FontLoadError> {
        let settings = fontdue::FontSettings {
            scale: pixel_height,
            ..fontdue::FontSettings::default()
        };
        let font = fontdue::Font::from_bytes(bytes, settings)
            .map_err(|e| FontLoadError(e.to_string()))?;

        let mut atlas = Self::empty(pixel_height);
        let mut blank = 0usize;
        for code in 0..GLYPH_COUNT as u8 {
            let (m, bitmap) = font.rasterize(char::from(code), pixel_height);
            let glyph = Glyph::new(
                m.width as u32,
                m.height as u32,
                m.xmin,
                m.ymin + m.height as i32,
                m.advance_width,
                bitmap,
            );
            if glyph.is_blank() {
                blank += 1;
            }
            atlas.glyphs[code as usize] = Some(glyph);
        }

        log::debug!(
            "font atlas built: {} glyphs at {}px ({} blank)",
            GLYPH_COUNT,
            pixel_height,
            blank
        );
        Ok(atlas)
    }

    /// Atlas with no glyphs; every lookup misses.
    pub fn empty(pixel_height: f32) -> Self {
        Self {
            pixel_height,
            glyphs: vec![None; GLYPH_COUNT],
        }
    }

    /// Sets the glyph for `ch`. Codes outside `0..128` are ignored.
    pub fn insert(&mut self, ch: char, glyph: Glyph) {
        if let Some(slot) = self.glyphs.get_mut(ch as usize) {
            *slot = Some(glyph);
        }
    }

    #[inline]
    pub fn pixel_height(&self) -> f32 {
        self.pixel_height
    }

    /// Looks up a glyph. Never falls back to a default entry.
    #[inline]
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(ch as usize)?.as_ref()
    }

    /// Iterates `(code, glyph)` for every populated entry.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Glyph)> {
        self.glyphs
            .iter()
            .enumerate()
            .filter_map(|(code, g)| Some((code as u8, g.as_ref()?)))
    }

    /// Moves the CPU bitmap out of the glyph for `code`, leaving metrics intact.
    pub(crate) fn take_bitmap(&mut self, code: u8) -> Vec<u8> {
        self.glyphs
            .get_mut(code as usize)
            .and_then(Option::as_mut)
            .map(|g| std::mem::take(&mut g.bitmap))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_rejects_garbage_bytes() {
        let err = FontAtlas::build(b"definitely not a font", ATLAS_PIXEL_HEIGHT).unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
    }

    #[test]
    fn lookup_outside_ascii_misses() {
        let mut atlas = FontAtlas::empty(ATLAS_PIXEL_HEIGHT);
        atlas.insert('A', Glyph::new(10, 12, 1, 12, 14.0, vec![0; 120]));
        atlas.insert('é', Glyph::new(10, 12, 1, 12, 14.0, vec![0; 120]));
        assert!(atlas.glyph('A').is_some());
        assert!(atlas.glyph('B').is_none());
        assert!(atlas.glyph('é').is_none());
        assert_eq!(atlas.iter().count(), 1);
    }

    #[test]
    fn take_bitmap_keeps_metrics() {
        let mut atlas = FontAtlas::empty(ATLAS_PIXEL_HEIGHT);
        atlas.insert('A', Glyph::new(2, 2, 0, 2, 3.0, vec![1, 2, 3, 4]));
        assert_eq!(atlas.take_bitmap(b'A'), vec![1, 2, 3, 4]);
        let g = atlas.glyph('A').unwrap();
        assert!(g.bitmap.is_empty());
        assert_eq!((g.width, g.height, g.advance), (2, 2, 3.0));
        assert!(atlas.take_bitmap(b'Z').is_empty());
    }

    #[test]
    fn blank_glyph_detection() {
        assert!(Glyph::new(0, 0, 0, 0, 12.0, Vec::new()).is_blank());
        assert!(!Glyph::new(1, 1, 0, 1, 12.0, vec![255]).is_blank());
    }
}
