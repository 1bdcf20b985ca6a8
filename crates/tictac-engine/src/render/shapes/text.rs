use bytemuck::{Pod, Zeroable};

use crate::coords::Mat4;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};
use crate::text::{layout_line, FontAtlas, GlyphQuad, GLYPH_COUNT};

use super::common::{
    draw_uniform_layout_entry, ensure_vertex_capacity, premul_alpha_blend, triangle_list,
    DrawRange, DrawUniform, DrawUniforms,
};

// ── per-glyph GPU resources ───────────────────────────────────────────────

struct GlyphTexture {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Renderer for `DrawCmd::Text`.
///
/// Owns the [`FontAtlas`]. On the first frame every non-blank glyph is
/// uploaded into its own R8Unorm texture (linear filtering, clamp to edge)
/// and its CPU bitmap is released; only metrics stay on the CPU.
///
/// Each glyph is one textured quad and one draw call. All quads of a text
/// command share that command's uniform slot (projection + color).
pub struct TextRenderer {
    atlas: FontAtlas,

    // pipeline
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    uniform_bgl: Option<wgpu::BindGroupLayout>,
    glyph_bgl: Option<wgpu::BindGroupLayout>,

    // uniforms
    uniform_bind_group: Option<wgpu::BindGroup>,
    bind_group_generation: Option<u64>,
    uniforms: DrawUniforms,

    // glyph textures, indexed by character code
    sampler: Option<wgpu::Sampler>,
    glyph_textures: Vec<Option<GlyphTexture>>,
    uploaded: bool,

    // geometry
    vertex_buf: Option<wgpu::Buffer>,
    vertex_capacity: usize,

    // per-frame scratch
    vertices: Vec<TextVertex>,
    draws: Vec<(DrawRange, u8)>,
    draw_uniforms: Vec<DrawUniform>,

    warned_unknown: bool,
}

impl TextRenderer {
    pub fn new(atlas: FontAtlas) -> Self {
        Self {
            atlas,
            pipeline_format: None,
            pipeline: None,
            uniform_bgl: None,
            glyph_bgl: None,
            uniform_bind_group: None,
            bind_group_generation: None,
            uniforms: DrawUniforms::default(),
            sampler: None,
            glyph_textures: Vec::new(),
            uploaded: false,
            vertex_buf: None,
            vertex_capacity: 0,
            vertices: Vec::new(),
            draws: Vec::new(),
            draw_uniforms: Vec::new(),
            warned_unknown: false,
        }
    }

    /// Renders all `DrawCmd::Text` entries in `draw_list`, in order.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &DrawList,
        projection: &Mat4,
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_sampler(ctx);
        self.ensure_glyph_textures(ctx);

        // ── build glyph quads ──────────────────────────────────────────────
        self.vertices.clear();
        self.draws.clear();
        self.draw_uniforms.clear();

        for cmd in draw_list.iter() {
            let DrawCmd::Text(cmd) = cmd else { continue };

            let line = layout_line(&self.atlas, &cmd.text, cmd.origin.x, cmd.origin.y, cmd.scale);
            if line.skipped > 0 && !self.warned_unknown {
                log::debug!(
                    "TextRenderer: {} char(s) without a glyph in {:?}; skipped",
                    line.skipped,
                    cmd.text
                );
                self.warned_unknown = true;
            }
            if line.quads.is_empty() {
                continue;
            }

            let slot = self.draw_uniforms.len();
            self.draw_uniforms.push(DrawUniform::new(projection, cmd.color));

            for q in &line.quads {
                let first = self.vertices.len() as u32;
                push_quad(&mut self.vertices, q);
                self.draws.push((DrawRange { first, count: 6, slot }, q.code));
            }
        }

        if self.draws.is_empty() {
            return;
        }

        // ── mutable operations before any immutable borrows ────────────────
        self.uniforms
            .ensure_capacity(ctx, self.draw_uniforms.len(), "tictac text uniforms");
        self.ensure_uniform_bindings(ctx);
        ensure_vertex_capacity::<TextVertex>(
            ctx,
            &mut self.vertex_buf,
            &mut self.vertex_capacity,
            self.vertices.len(),
            "tictac text vbo",
        );

        self.uniforms.upload(ctx, &self.draw_uniforms);
        let Some(vertex_buf) = self.vertex_buf.as_ref() else { return };
        ctx.queue
            .write_buffer(vertex_buf, 0, bytemuck::cast_slice(&self.vertices));

        // ── immutable borrows ──────────────────────────────────────────────
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(uniform_bg) = self.uniform_bind_group.as_ref() else { return };

        let mut rpass = target.begin_load_pass("tictac text pass");
        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vertex_buf.slice(..));

        for (d, code) in &self.draws {
            let Some(Some(glyph)) = self.glyph_textures.get(*code as usize) else { continue };
            rpass.set_bind_group(0, uniform_bg, &[self.uniforms.offset(d.slot)]);
            rpass.set_bind_group(1, &glyph.bind_group, &[]);
            rpass.draw(d.first..d.first + d.count, 0..1);
        }
    }

    // ── glyph upload ───────────────────────────────────────────────────────

    fn ensure_glyph_textures(&mut self, ctx: &RenderCtx<'_>) {
        if self.uploaded {
            return;
        }
        let Some(bgl) = self.glyph_bgl.as_ref() else { return };
        let Some(sampler) = self.sampler.as_ref() else { return };

        let codes: Vec<u8> = self
            .atlas
            .iter()
            .filter(|(_, g)| !g.is_blank())
            .map(|(code, _)| code)
            .collect();

        let mut textures: Vec<Option<GlyphTexture>> = (0..GLYPH_COUNT).map(|_| None).collect();

        for code in codes {
            let Some((w, h)) = self.atlas.glyph(char::from(code)).map(|g| (g.width, g.height))
            else {
                continue;
            };
            let bitmap = self.atlas.take_bitmap(code);
            if bitmap.len() < (w * h) as usize {
                log::warn!("TextRenderer: glyph {code} bitmap is truncated; skipped");
                continue;
            }

            let size = wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 };
            let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
                label: Some("tictac glyph texture"),
                size,
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::R8Unorm,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            });

            ctx.queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: 0,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                &bitmap,
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(w),
                    rows_per_image: Some(h),
                },
                size,
            );

            let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
            let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("tictac glyph bind group"),
                layout: bgl,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                ],
            });

            textures[code as usize] = Some(GlyphTexture { _texture: texture, bind_group });
        }

        let uploaded = textures.iter().filter(|t| t.is_some()).count();
        log::debug!("TextRenderer: uploaded {uploaded} glyph textures");

        self.glyph_textures = textures;
        self.uploaded = true;
    }

    // ── lazy-init helpers ──────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tictac text shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/text.wgsl").into()),
        });

        let uniform_bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("tictac text uniform bgl"),
            entries: &[draw_uniform_layout_entry(0)],
        });

        // The glyph layout is created once; glyph bind groups reference it.
        if self.glyph_bgl.is_none() {
            self.glyph_bgl = Some(ctx.device.create_bind_group_layout(
                &wgpu::BindGroupLayoutDescriptor {
                    label: Some("tictac text glyph bgl"),
                    entries: &[
                        wgpu::BindGroupLayoutEntry {
                            binding: 0,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Texture {
                                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                                view_dimension: wgpu::TextureViewDimension::D2,
                                multisampled: false,
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 1,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                            count: None,
                        },
                    ],
                },
            ));
        }
        let Some(glyph_bgl) = self.glyph_bgl.as_ref() else { return };

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("tictac text pipeline layout"),
            bind_group_layouts: &[&uniform_bgl, glyph_bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("tictac text pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[TextVertex::layout()],
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
        self.uniform_bgl = Some(uniform_bgl);
        self.uniform_bind_group = None;
        self.bind_group_generation = None;
    }

    fn ensure_sampler(&mut self, ctx: &RenderCtx<'_>) {
        if self.sampler.is_some() {
            return;
        }
        self.sampler = Some(ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("tictac glyph sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        }));
    }

    fn ensure_uniform_bindings(&mut self, ctx: &RenderCtx<'_>) {
        let generation = self.uniforms.generation();
        if self.uniform_bind_group.is_some() && self.bind_group_generation == Some(generation) {
            return;
        }
        let Some(bgl) = self.uniform_bgl.as_ref() else { return };
        let Some(resource) = self.uniforms.binding() else { return };

        self.uniform_bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tictac text uniform bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry { binding: 0, resource }],
        }));
        self.bind_group_generation = Some(generation);
    }
}

/// Appends the six vertices of `q`; `v = 0` is the top row of the bitmap.
fn push_quad(out: &mut Vec<TextVertex>, q: &GlyphQuad) {
    let (x0, y0) = (q.x, q.y);
    let (x1, y1) = (q.x + q.w, q.y + q.h);
    out.extend_from_slice(&[
        TextVertex { pos: [x0, y1], uv: [0.0, 0.0] },
        TextVertex { pos: [x0, y0], uv: [0.0, 1.0] },
        TextVertex { pos: [x1, y0], uv: [1.0, 1.0] },
        TextVertex { pos: [x0, y1], uv: [0.0, 0.0] },
        TextVertex { pos: [x1, y0], uv: [1.0, 1.0] },
        TextVertex { pos: [x1, y1], uv: [1.0, 0.0] },
    ]);
}

// ── GPU types ─────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct TextVertex {
    pos: [f32; 2],
    uv: [f32; 2],
}

impl TextVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x2  // uv
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TextVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
