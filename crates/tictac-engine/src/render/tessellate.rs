//! CPU tessellation of primitives into triangle lists.
//!
//! wgpu has no wide-line primitive, so strokes are expanded into quads here.
//! All output is in layout space, two triangles (six vertices) per quad.

use crate::coords::{Rect, Vec2};

/// Segment count of a circle outline.
pub const CIRCLE_SEGMENTS: usize = 50;

/// Vertices produced per quad.
pub const QUAD_VERTS: usize = 6;

/// Two triangles covering `rect`. Empty rects produce nothing.
pub fn rect(out: &mut Vec<[f32; 2]>, rect: Rect) {
    let r = rect.normalized();
    if r.is_empty() {
        return;
    }
    let (x0, y0) = (r.origin.x, r.origin.y);
    let (x1, y1) = (x0 + r.size.x, y0 + r.size.y);
    out.extend_from_slice(&[
        [x0, y0],
        [x1, y0],
        [x1, y1],
        [x0, y0],
        [x1, y1],
        [x0, y1],
    ]);
}

/// Expands the segment `a -> b` into a quad `width` wide, butt capped.
///
/// Zero-length segments and non-positive widths produce nothing.
pub fn line(out: &mut Vec<[f32; 2]>, a: Vec2, b: Vec2, width: f32) {
    let d = b - a;
    let len = d.length();
    if !(len > f32::EPSILON) || !(width > 0.0) || !a.is_finite() || !b.is_finite() {
        return;
    }
    let n = d.perp() * (0.5 * width / len);
    let p0 = a + n;
    let p1 = a - n;
    let p2 = b - n;
    let p3 = b + n;
    out.extend_from_slice(&[
        [p0.x, p0.y],
        [p1.x, p1.y],
        [p2.x, p2.y],
        [p0.x, p0.y],
        [p2.x, p2.y],
        [p3.x, p3.y],
    ]);
}

/// Point `i` of the closed polyline approximating a circle.
#[inline]
pub fn circle_point(center: Vec2, radius: f32, i: usize, segments: usize) -> Vec2 {
    let angle = i as f32 * std::f32::consts::TAU / segments as f32;
    Vec2::new(center.x + angle.cos() * radius, center.y + angle.sin() * radius)
}

/// Strokes the closed `segments`-gon through the circle, one quad per edge.
pub fn circle(out: &mut Vec<[f32; 2]>, center: Vec2, radius: f32, width: f32, segments: usize) {
    if segments < 3 || !(radius > 0.0) {
        return;
    }
    for i in 0..segments {
        let a = circle_point(center, radius, i, segments);
        let b = circle_point(center, radius, (i + 1) % segments, segments);
        line(out, a, b, width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn rect_covers_corners() {
        let mut v = Vec::new();
        rect(&mut v, Rect::new(300.0, 530.0, 200.0, 50.0));
        assert_eq!(v.len(), QUAD_VERTS);
        for corner in [[300.0, 530.0], [500.0, 530.0], [500.0, 580.0], [300.0, 580.0]] {
            assert!(v.contains(&corner), "missing {corner:?}");
        }
    }

    #[test]
    fn empty_rect_emits_nothing() {
        let mut v = Vec::new();
        rect(&mut v, Rect::new(10.0, 10.0, 0.0, 20.0));
        assert!(v.is_empty());
    }

    #[test]
    fn vertical_line_expands_horizontally() {
        let mut v = Vec::new();
        line(&mut v, Vec2::new(325.0, 45.0), Vec2::new(325.0, 495.0), 10.0);
        assert_eq!(v.len(), QUAD_VERTS);
        let xs: Vec<f32> = v.iter().map(|p| p[0]).collect();
        let ys: Vec<f32> = v.iter().map(|p| p[1]).collect();
        assert!(xs.iter().all(|&x| close(x, 320.0) || close(x, 330.0)));
        assert!(ys.iter().all(|&y| close(y, 45.0) || close(y, 495.0)));
    }

    #[test]
    fn diagonal_line_keeps_width() {
        let mut v = Vec::new();
        let (a, b) = (Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0));
        line(&mut v, a, b, 15.0);
        // p0 and p1 straddle `a` at half the width each.
        let p0 = Vec2::new(v[0][0], v[0][1]);
        let p1 = Vec2::new(v[1][0], v[1][1]);
        assert!(close((p0 - p1).length(), 15.0));
        assert!(close((p0 - a).length(), 7.5));
    }

    #[test]
    fn degenerate_line_emits_nothing() {
        let mut v = Vec::new();
        line(&mut v, Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), 10.0);
        line(&mut v, Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0), 0.0);
        assert!(v.is_empty());
    }

    #[test]
    fn circle_is_fifty_stroked_segments() {
        let mut v = Vec::new();
        let c = Vec2::new(250.0, 120.0);
        circle(&mut v, c, 50.0, 15.0, CIRCLE_SEGMENTS);
        assert_eq!(v.len(), CIRCLE_SEGMENTS * QUAD_VERTS);
        for p in &v {
            let r = (Vec2::new(p[0], p[1]) - c).length();
            assert!(r >= 50.0 - 7.5 - 1e-3 && r <= 50.0 + 7.5 + 1e-3, "r = {r}");
        }
    }

    #[test]
    fn circle_polyline_is_closed() {
        let c = Vec2::new(0.0, 0.0);
        let first = circle_point(c, 10.0, 0, CIRCLE_SEGMENTS);
        let last = circle_point(c, 10.0, CIRCLE_SEGMENTS, CIRCLE_SEGMENTS);
        assert!(close(first.x, last.x) && close(first.y, last.y));
        assert_eq!(first, Vec2::new(10.0, 0.0));
    }
}
