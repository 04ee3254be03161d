use bytemuck::{Pod, Zeroable};
use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use wgpu::util::DeviceExt;

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList, TextCmd};
use crate::text::FontSystem;

use super::atlas::GlyphAtlas;
use super::common::{
    begin_load_pass, premul_alpha_blend, viewport_ubo_layout_entry, QuadVertex, ViewportUniform,
    QUAD_INDICES, QUAD_VERTICES,
};

/// Renderer for `DrawCmd::Text`.
///
/// Glyphs are rasterized with fontdue on first use and cached in a
/// 2048 × 2048 R8 atlas for the renderer's lifetime. Layout runs in fontdue's
/// y-up coordinate system, so glyph boxes land directly in the editor's
/// bottom-left-origin space. A command's `origin` is the left end of its
/// baseline.
pub struct TextRenderer {
    gpu: Option<TextGpu>,
    instances: Vec<GlyphInstance>,
    layout: Layout<()>,
}

/// Device objects, created on first render.
struct TextGpu {
    format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    viewport_ubo: wgpu::Buffer,
    atlas: GlyphAtlas,
    quad_vbo: wgpu::Buffer,
    quad_ibo: wgpu::Buffer,
    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            gpu: None,
            instances: Vec::new(),
            layout: Layout::new(CoordinateSystem::PositiveYUp),
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders all `DrawCmd::Text` entries in `draw_list`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &DrawList,
        font_system: &FontSystem,
    ) {
        if self.gpu.as_ref().is_none_or(|g| g.format != ctx.surface_format) {
            self.gpu = Some(TextGpu::new(ctx));
        }
        let Some(gpu) = self.gpu.as_mut() else { return; };

        self.instances.clear();
        for cmd in draw_list.iter().filter_map(|c| match c {
            DrawCmd::Text(t) => Some(t),
            _ => None,
        }) {
            layout_glyphs(&mut self.layout, ctx, gpu, font_system, cmd, &mut self.instances);
        }
        if self.instances.is_empty() {
            return;
        }

        ctx.queue
            .write_buffer(&gpu.viewport_ubo, 0, bytemuck::bytes_of(&ViewportUniform::new(ctx.viewport)));
        gpu.ensure_instance_capacity(ctx, self.instances.len());
        let Some(instance_vbo) = gpu.instance_vbo.as_ref() else { return; };
        ctx.queue.write_buffer(instance_vbo, 0, bytemuck::cast_slice(&self.instances));

        let mut rpass = begin_load_pass(target.encoder, target.color_view, "vellum text pass");
        rpass.set_pipeline(&gpu.pipeline);
        rpass.set_bind_group(0, &gpu.bind_group, &[]);
        rpass.set_vertex_buffer(0, gpu.quad_vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(gpu.quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..self.instances.len() as u32);
    }
}

/// Device pixels per logical unit used for rasterizing; falls back to 1 for
/// nonsense values some platforms report while a window is being created.
fn raster_scale(scale_factor: f32) -> f32 {
    if scale_factor.is_finite() && scale_factor > 0.0 {
        scale_factor
    } else {
        1.0
    }
}

/// Lays out one command and appends a quad per visible glyph.
///
/// Layout and rasterization run in device pixels so text stays crisp on
/// high-DPI displays; quad corners are mapped back to logical units.
fn layout_glyphs(
    layout: &mut Layout<()>,
    ctx: &RenderCtx<'_>,
    gpu: &mut TextGpu,
    font_system: &FontSystem,
    cmd: &TextCmd,
    out: &mut Vec<GlyphInstance>,
) {
    let Some(font) = font_system.get(cmd.font) else {
        log::warn!("TextRenderer: unknown FontId {:?}, skipping", cmd.font);
        return;
    };
    let scale = raster_scale(ctx.scale_factor);

    // The layout box top sits one ascent above the baseline.
    layout.reset(&LayoutSettings {
        x: cmd.origin.x * scale,
        y: (cmd.origin.y + font_system.ascent(cmd.font, cmd.size)) * scale,
        ..LayoutSettings::default()
    });
    layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size * scale, 0));

    let color = cmd.color.to_array();
    for g in layout.glyphs() {
        if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
            continue;
        }
        let Some(region) = gpu.atlas.region(ctx, font, g.key) else { continue; };
        out.push(GlyphInstance {
            dst_min: [g.x / scale, g.y / scale],
            dst_max: [(g.x + g.width as f32) / scale, (g.y + g.height as f32) / scale],
            uv_min: region.uv_min,
            uv_max: region.uv_max,
            color,
        });
    }
}

impl TextGpu {
    fn new(ctx: &RenderCtx<'_>) -> Self {
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("vellum text shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/text.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("vellum text bgl"),
            entries: &[
                viewport_ubo_layout_entry(),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("vellum text pipeline layout"),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("vellum text pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout(), GlyphInstance::layout()],
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
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("vellum text sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("vellum text viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let atlas = GlyphAtlas::new(ctx);

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("vellum text bind group"),
            layout: &bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: viewport_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(atlas.view()),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let quad_vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("vellum text quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let quad_ibo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("vellum text quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            format: ctx.surface_format,
            pipeline,
            bind_group,
            viewport_ubo,
            atlas,
            quad_vbo,
            quad_ibo,
            instance_vbo: None,
            instance_capacity: 0,
        }
    }

    fn ensure_instance_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.instance_capacity && self.instance_vbo.is_some() {
            return;
        }
        let new_cap = required.next_power_of_two().max(64);
        self.instance_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("vellum text instance vbo"),
            size: (new_cap * std::mem::size_of::<GlyphInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.instance_capacity = new_cap;
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// One glyph quad. `dst_*` are y-up logical px; `uv_*` are atlas coordinates
/// with row 0 at the top of the bitmap, so the shader flips v.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GlyphInstance {
    dst_min: [f32; 2],
    dst_max: [f32; 2],
    uv_min: [f32; 2],
    uv_max: [f32; 2],
    color: [f32; 4],
}

impl GlyphInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2, // dst_min
        2 => Float32x2, // dst_max
        3 => Float32x2, // uv_min
        4 => Float32x2, // uv_max
        5 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GlyphInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
