use super::Vec2;

/// Axis-aligned rectangle stored as min corner + size.
///
/// In layout space the min corner is the bottom-left one.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(
            self.origin.x + self.size.x * 0.5,
            self.origin.y + self.size.y * 0.5,
        )
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x < (r.origin.x + r.size.x)
            && p.y < (r.origin.y + r.size.y)
    }

    /// Closed containment: [min, max]. For targets with no neighbour to
    /// share an edge with.
    #[inline]
    pub fn contains_closed(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x <= (r.origin.x + r.size.x)
            && p.y <= (r.origin.y + r.size.y)
    }

    /// Shrinks the rectangle by `amount` on every side.
    #[inline]
    pub fn inset(self, amount: f32) -> Self {
        Rect::new(
            self.origin.x + amount,
            self.origin.y + amount,
            self.size.x - 2.0 * amount,
            self.size.y - 2.0 * amount,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_width() {
        let n = r(10.0, 0.0, -4.0, 5.0).normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_min_corner_inclusive() {
        assert!(r(175.0, 45.0, 450.0, 450.0).contains(Vec2::new(175.0, 45.0)));
    }

    #[test]
    fn contains_max_edge_exclusive() {
        let board = r(175.0, 45.0, 450.0, 450.0);
        assert!(!board.contains(Vec2::new(625.0, 100.0)));
        assert!(!board.contains(Vec2::new(300.0, 495.0)));
        assert!(board.contains(Vec2::new(624.9, 494.9)));
    }

    #[test]
    fn contains_outside() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(-1.0, 5.0)));
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(5.0, -1.0)));
    }

    #[test]
    fn contains_closed_includes_max_edges() {
        let button = r(300.0, 530.0, 200.0, 50.0);
        assert!(button.contains_closed(Vec2::new(500.0, 560.0)));
        assert!(button.contains_closed(Vec2::new(400.0, 580.0)));
        assert!(button.contains_closed(Vec2::new(300.0, 530.0)));
        assert!(!button.contains_closed(Vec2::new(500.1, 560.0)));
        assert!(!button.contains_closed(Vec2::new(400.0, 529.9)));
    }

    // ── helpers ───────────────────────────────────────────────────────────

    #[test]
    fn center_and_inset() {
        let cell = r(175.0, 45.0, 150.0, 150.0);
        assert_eq!(cell.center(), Vec2::new(250.0, 120.0));
        assert_eq!(cell.inset(25.0), r(200.0, 70.0, 100.0, 100.0));
        assert_eq!(cell.max(), Vec2::new(325.0, 195.0));
    }

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
