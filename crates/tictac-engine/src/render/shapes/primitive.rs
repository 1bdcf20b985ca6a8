use bytemuck::{Pod, Zeroable};

use crate::coords::Mat4;
use crate::render::tessellate::{self, CIRCLE_SEGMENTS};
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{
    draw_uniform_layout_entry, ensure_vertex_capacity, premul_alpha_blend, triangle_list,
    DrawRange, DrawUniform, DrawUniforms,
};

/// Flat-color renderer for `DrawCmd::Rect`, `DrawCmd::Line` and `DrawCmd::Circle`.
///
/// Geometry is tessellated on the CPU into one shared vertex buffer per
/// frame; each command is then drawn separately with its own uniform slot,
/// in the order it was recorded. Text commands are left to `TextRenderer`.
#[derive(Default)]
pub struct PrimitiveRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    bind_group_generation: Option<u64>,
    uniforms: DrawUniforms,

    vertex_buf: Option<wgpu::Buffer>,
    vertex_capacity: usize,

    // per-frame scratch
    positions: Vec<[f32; 2]>,
    draws: Vec<DrawRange>,
    draw_uniforms: Vec<DrawUniform>,
}

impl PrimitiveRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws every primitive in `draw_list` into `target` using `projection`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &DrawList,
        projection: &Mat4,
    ) {
        self.positions.clear();
        self.draws.clear();
        self.draw_uniforms.clear();

        for cmd in draw_list.iter() {
            let first = self.positions.len();
            let color = match cmd {
                DrawCmd::Rect(r) => {
                    tessellate::rect(&mut self.positions, r.rect);
                    r.color
                }
                DrawCmd::Line(l) => {
                    tessellate::line(&mut self.positions, l.from, l.to, l.width);
                    l.color
                }
                DrawCmd::Circle(c) => {
                    tessellate::circle(
                        &mut self.positions,
                        c.center,
                        c.radius,
                        c.stroke_width,
                        CIRCLE_SEGMENTS,
                    );
                    c.color
                }
                DrawCmd::Text(_) => continue,
            };

            let count = self.positions.len() - first;
            if count == 0 {
                continue;
            }
            self.draws.push(DrawRange {
                first: first as u32,
                count: count as u32,
                slot: self.draw_uniforms.len(),
            });
            self.draw_uniforms.push(DrawUniform::new(projection, color));
        }

        if self.draws.is_empty() {
            return;
        }

        // Mutating methods must happen before borrowing pipeline/buffers immutably.
        self.ensure_pipeline(ctx);
        self.uniforms
            .ensure_capacity(ctx, self.draw_uniforms.len(), "tictac primitive uniforms");
        self.ensure_bindings(ctx);
        ensure_vertex_capacity::<PrimitiveVertex>(
            ctx,
            &mut self.vertex_buf,
            &mut self.vertex_capacity,
            self.positions.len(),
            "tictac primitive vbo",
        );

        self.uniforms.upload(ctx, &self.draw_uniforms);
        let Some(vertex_buf) = self.vertex_buf.as_ref() else { return };
        ctx.queue
            .write_buffer(vertex_buf, 0, bytemuck::cast_slice(&self.positions));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.begin_load_pass("tictac primitive pass");
        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vertex_buf.slice(..));

        for d in &self.draws {
            rpass.set_bind_group(0, bind_group, &[self.uniforms.offset(d.slot)]);
            rpass.draw(d.first..d.first + d.count, 0..1);
        }
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tictac primitive shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/primitive.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("tictac primitive bgl"),
                    entries: &[draw_uniform_layout_entry(0)],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("tictac primitive pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("tictac primitive pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[PrimitiveVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: triangle_list(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.bind_group_generation = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        let generation = self.uniforms.generation();
        if self.bind_group.is_some() && self.bind_group_generation == Some(generation) {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };
        let Some(resource) = self.uniforms.binding() else { return };

        self.bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tictac primitive bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry { binding: 0, resource }],
        }));
        self.bind_group_generation = Some(generation);
    }
}

/// Layout-space position; the same layout as the tessellator's `[f32; 2]`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct PrimitiveVertex {
    pos: [f32; 2],
}

impl PrimitiveVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PrimitiveVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
