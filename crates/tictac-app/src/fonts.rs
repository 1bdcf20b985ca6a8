use std::io;
use std::path::Path;

use tictac_engine::text::{FontAtlas, ATLAS_PIXEL_HEIGHT};

/// Bundled font, relative to the working directory. The TTF is not committed;
/// drop a Roboto Regular build at this path (see `assets/README.md`).
pub const BUNDLED_FONT: &str = "assets/Roboto-Regular.ttf";

/// Tried in order after the bundled font.
pub const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Builds an atlas from the first font in `candidates` that reads and parses.
///
/// Returns `None` when none does; the game then runs without text.
pub fn load_atlas<P: AsRef<Path>>(candidates: &[P]) -> Option<FontAtlas> {
    for path in candidates {
        let path = path.as_ref();
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("font {} not found", path.display());
                continue;
            }
            Err(e) => {
                log::warn!("failed to read font {}: {e}", path.display());
                continue;
            }
        };

        match FontAtlas::build(&bytes, ATLAS_PIXEL_HEIGHT) {
            Ok(atlas) => {
                log::info!(
                    "loaded font {} ({} glyphs)",
                    path.display(),
                    atlas.iter().count()
                );
                return Some(atlas);
            }
            Err(e) => log::warn!("font {} is unusable: {e}", path.display()),
        }
    }

    log::warn!("no usable font found; text is disabled");
    None
}

/// The bundled font followed by the system fallbacks.
pub fn default_candidates() -> Vec<&'static str> {
    std::iter::once(BUNDLED_FONT)
        .chain(SYSTEM_FONTS.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fonts_yield_none() {
        let paths = ["/nonexistent/tictac/a.ttf", "/nonexistent/tictac/b.ttf"];
        assert!(load_atlas(&paths).is_none());
    }

    #[test]
    fn unparsable_font_is_skipped() {
        let path = std::env::temp_dir().join(format!("tictac-bad-font-{}.ttf", std::process::id()));
        std::fs::write(&path, b"definitely not a font").unwrap();
        let result = load_atlas(&[path.as_path()]);
        std::fs::remove_file(&path).ok();
        assert!(result.is_none());
    }

    #[test]
    fn bundled_font_is_tried_first() {
        let candidates = default_candidates();
        assert_eq!(candidates[0], BUNDLED_FONT);
        assert_eq!(candidates.len(), 1 + SYSTEM_FONTS.len());
    }
}
