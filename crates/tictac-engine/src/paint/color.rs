/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Creates an opaque color from sRGB-encoded components in `[0, 1]`.
    #[inline]
    pub fn from_srgb_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::from_srgb(r, g, b, 1.0)
    }

    /// Creates a premultiplied color from straight sRGB `f32` components in `[0, 1]`.
    ///
    /// RGB is decoded to linear before premultiplying; alpha is already linear.
    #[inline]
    pub fn from_srgb(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_straight(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a)
    }

    /// Creates a premultiplied color from straight-alpha linear components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Clear value for a render pass load op.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

/// Decodes one sRGB transfer-function value to linear.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn srgb_endpoints_are_fixed() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!(approx(srgb_to_linear(1.0), 1.0));
    }

    #[test]
    fn srgb_mid_grey_is_darker_in_linear() {
        // sRGB 0.5 ≈ 0.2140 linear.
        assert!(approx(srgb_to_linear(0.5), 0.2140));
        // Linear segment below the knee.
        assert!(approx(srgb_to_linear(0.04), 0.04 / 12.92));
    }

    #[test]
    fn from_srgb_premultiplies_after_decoding() {
        let c = Color::from_srgb(1.0, 0.5, 0.0, 0.5);
        assert!(approx(c.r, 0.5));
        assert!(approx(c.g, 0.2140 * 0.5));
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 0.5);
    }

    #[test]
    fn from_straight_clamps() {
        let c = Color::from_straight(2.0, -1.0, 0.5, 1.5);
        assert_eq!(c, Color { r: 1.0, g: 0.0, b: 0.5, a: 1.0 });
    }
}
