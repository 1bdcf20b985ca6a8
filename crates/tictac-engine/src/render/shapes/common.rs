//! Shared GPU types and utilities used by the shape renderers.

use bytemuck::{Pod, Zeroable};

use crate::coords::Mat4;
use crate::paint::Color;
use crate::render::RenderCtx;

// ── blend ─────────────────────────────────────────────────────────────────

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

pub(super) fn triangle_list() -> wgpu::PrimitiveState {
    wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::TriangleList,
        strip_index_format: None,
        front_face: wgpu::FrontFace::Ccw,
        cull_mode: None,
        polygon_mode: wgpu::PolygonMode::Fill,
        unclipped_depth: false,
        conservative: false,
    }
}

// ── per-draw uniform ──────────────────────────────────────────────────────

/// Uniform slot bound once per draw: projection + premultiplied color.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct DrawUniform {
    pub projection: Mat4,
    pub color: [f32; 4],
}

impl DrawUniform {
    #[inline]
    pub(super) fn new(projection: &Mat4, color: Color) -> Self {
        Self { projection: *projection, color: color.to_array() }
    }
}

/// `DrawUniform` is 80 bytes, so the binding size is always non-zero.
pub(super) fn draw_uniform_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<DrawUniform>() as u64)
        .expect("DrawUniform has non-zero size by construction")
}

pub(super) fn draw_uniform_layout_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: true,
            min_binding_size: Some(draw_uniform_binding_size()),
        },
        count: None,
    }
}

/// Rounds `size` up to the next multiple of `align` (`align` > 0).
#[inline]
pub(super) fn align_up(size: u64, align: u64) -> u64 {
    size.div_ceil(align) * align
}

/// Growable uniform buffer addressed with dynamic offsets, one slot per draw.
///
/// `generation` bumps whenever the buffer is reallocated so bind groups
/// referencing it can be rebuilt.
#[derive(Default)]
pub(super) struct DrawUniforms {
    buffer: Option<wgpu::Buffer>,
    capacity: usize,
    stride: u64,
    generation: u64,
    staging: Vec<u8>,
}

impl DrawUniforms {
    /// Makes room for `slots` uniforms.
    pub(super) fn ensure_capacity(&mut self, ctx: &RenderCtx<'_>, slots: usize, label: &'static str) {
        if self.stride == 0 {
            let align = ctx.device.limits().min_uniform_buffer_offset_alignment.max(1) as u64;
            self.stride = align_up(std::mem::size_of::<DrawUniform>() as u64, align);
        }
        if slots <= self.capacity && self.buffer.is_some() {
            return;
        }

        let new_cap = slots.next_power_of_two().max(16);
        self.buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: new_cap as u64 * self.stride,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.capacity = new_cap;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Uploads `uniforms` into consecutive slots starting at slot 0.
    pub(super) fn upload(&mut self, ctx: &RenderCtx<'_>, uniforms: &[DrawUniform]) {
        let Some(buffer) = self.buffer.as_ref() else { return };
        let stride = self.stride as usize;

        self.staging.clear();
        self.staging.resize(uniforms.len() * stride, 0);
        for (i, u) in uniforms.iter().enumerate() {
            let bytes = bytemuck::bytes_of(u);
            self.staging[i * stride..i * stride + bytes.len()].copy_from_slice(bytes);
        }
        ctx.queue.write_buffer(buffer, 0, &self.staging);
    }

    /// Dynamic offset of slot `i`.
    #[inline]
    pub(super) fn offset(&self, i: usize) -> u32 {
        (i as u64 * self.stride) as u32
    }

    #[inline]
    pub(super) fn generation(&self) -> u64 {
        self.generation
    }

    pub(super) fn binding(&self) -> Option<wgpu::BindingResource<'_>> {
        let buffer = self.buffer.as_ref()?;
        Some(wgpu::BindingResource::Buffer(wgpu::BufferBinding {
            buffer,
            offset: 0,
            size: Some(draw_uniform_binding_size()),
        }))
    }
}

// ── vertex buffer ─────────────────────────────────────────────────────────

/// Grows `buf` to hold at least `required` elements of `T`.
pub(super) fn ensure_vertex_capacity<T>(
    ctx: &RenderCtx<'_>,
    buf: &mut Option<wgpu::Buffer>,
    capacity: &mut usize,
    required: usize,
    label: &'static str,
) {
    if required <= *capacity && buf.is_some() {
        return;
    }
    let new_cap = required.next_power_of_two().max(256);
    *buf = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: (new_cap * std::mem::size_of::<T>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    }));
    *capacity = new_cap;
}

/// One recorded draw: a vertex range plus its uniform slot.
#[derive(Debug, Copy, Clone)]
pub(super) struct DrawRange {
    pub first: u32,
    pub count: u32,
    pub slot: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_uniform_is_80_bytes() {
        assert_eq!(std::mem::size_of::<DrawUniform>(), 80);
    }

    #[test]
    fn align_up_rounds_to_offset_alignment() {
        assert_eq!(align_up(80, 256), 256);
        assert_eq!(align_up(256, 256), 256);
        assert_eq!(align_up(257, 256), 512);
        assert_eq!(align_up(80, 16), 80);
    }
}
