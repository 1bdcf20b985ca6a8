//! Fixed orthographic projection.

/// Column-major 4x4 matrix, laid out the way WGSL `mat4x4<f32>` expects.
pub type Mat4 = [[f32; 4]; 4];

/// Orthographic projection mapping `[left, right] x [bottom, top]` onto NDC
/// `[-1, 1] x [-1, 1]`, with depth range `[-1, 1]` mapped onto `[1, -1]`.
///
/// Content drawn at `z = 0` lands at NDC depth 0, inside wgpu's `[0, 1]`
/// clip range.
pub fn ortho(left: f32, right: f32, bottom: f32, top: f32) -> Mat4 {
    let (near, far) = (-1.0_f32, 1.0_f32);
    let rl = right - left;
    let tb = top - bottom;
    let fz = far - near;
    [
        [2.0 / rl, 0.0, 0.0, 0.0],
        [0.0, 2.0 / tb, 0.0, 0.0],
        [0.0, 0.0, -2.0 / fz, 0.0],
        [-(right + left) / rl, -(top + bottom) / tb, -(far + near) / fz, 1.0],
    ]
}

/// Applies `m` to `(x, y, 0, 1)` and returns the resulting `(x, y)`.
pub fn transform_point(m: &Mat4, x: f32, y: f32) -> (f32, f32) {
    let ox = m[0][0] * x + m[1][0] * y + m[3][0];
    let oy = m[0][1] * x + m[1][1] * y + m[3][1];
    let ow = m[0][3] * x + m[1][3] * y + m[3][3];
    (ox / ow, oy / ow)
}
