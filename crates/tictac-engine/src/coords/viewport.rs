use super::Vec2;

/// Viewport size in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Maps a top-left-origin point in `self` to a bottom-left-origin point in
    /// `target`, scaling each axis by `target / self`.
    ///
    /// Returns `None` when either viewport is degenerate (e.g. a minimized
    /// window).
    pub fn map_point_flipped(self, p: Vec2, target: Viewport) -> Option<Vec2> {
        if !self.is_valid() || !target.is_valid() {
            return None;
        }
        let sx = target.width / self.width;
        let sy = target.height / self.height;
        Some(Vec2::new(p.x * sx, target.height - p.y * sy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: Viewport = Viewport::new(800.0, 600.0);

    #[test]
    fn same_size_only_flips_y() {
        let p = LAYOUT.map_point_flipped(Vec2::new(400.0, 45.0), LAYOUT).unwrap();
        assert_eq!(p, Vec2::new(400.0, 555.0));
    }

    #[test]
    fn resized_window_scales_back_to_layout() {
        let window = Viewport::new(1600.0, 1200.0);
        let p = window.map_point_flipped(Vec2::new(800.0, 90.0), LAYOUT).unwrap();
        assert_eq!(p, Vec2::new(400.0, 555.0));
    }

    #[test]
    fn degenerate_window_maps_nothing() {
        let minimized = Viewport::new(0.0, 0.0);
        assert!(minimized.map_point_flipped(Vec2::zero(), LAYOUT).is_none());
    }
}
