use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{begin_load_pass, premul_alpha_blend, viewport_ubo_layout_entry, ViewportUniform};

/// Renderer for `DrawCmd::Polygon` and `DrawCmd::LineLoop`.
///
/// Every command is tessellated on the CPU into one triangle list, so a single
/// draw call preserves paint order between fills and outlines.
#[derive(Default)]
pub struct MeshRenderer {
    gpu: Option<MeshGpu>,
    // scratch reused between frames
    vertices: Vec<MeshVertex>,
}

struct MeshGpu {
    format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    viewport_ubo: wgpu::Buffer,
    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders all polygon and line-loop entries in `draw_list`.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, draw_list: &DrawList) {
        self.vertices.clear();
        tessellate(draw_list, &mut self.vertices);
        if self.vertices.is_empty() {
            return;
        }

        if self.gpu.as_ref().is_none_or(|g| g.format != ctx.surface_format) {
            self.gpu = Some(MeshGpu::new(ctx));
        }
        let Some(gpu) = self.gpu.as_mut() else { return; };

        ctx.queue
            .write_buffer(&gpu.viewport_ubo, 0, bytemuck::bytes_of(&ViewportUniform::new(ctx.viewport)));
        gpu.upload(ctx, &self.vertices);
        let Some(vbo) = gpu.vbo.as_ref() else { return; };

        let mut rpass = begin_load_pass(target.encoder, target.color_view, "vellum mesh pass");
        rpass.set_pipeline(&gpu.pipeline);
        rpass.set_bind_group(0, &gpu.bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..self.vertices.len() as u32, 0..1);
    }
}

impl MeshGpu {
    fn new(ctx: &RenderCtx<'_>) -> Self {
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("vellum mesh shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/mesh.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("vellum mesh bgl"),
            entries: &[viewport_ubo_layout_entry()],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("vellum mesh pipeline layout"),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("vellum mesh pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[MeshVertex::layout()],
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
            // Fans and stroke quads come in both windings.
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

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("vellum mesh viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("vellum mesh bind group"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        Self {
            format: ctx.surface_format,
            pipeline,
            bind_group,
            viewport_ubo,
            vbo: None,
            vbo_capacity: 0,
        }
    }

    /// Copies `vertices` into the vertex buffer, growing it to the next power
    /// of two when they do not fit.
    fn upload(&mut self, ctx: &RenderCtx<'_>, vertices: &[MeshVertex]) {
        if vertices.len() > self.vbo_capacity {
            self.vbo = None;
        }
        let vbo = self.vbo.get_or_insert_with(|| {
            let cap = vertices.len().next_power_of_two().max(256);
            self.vbo_capacity = cap;
            ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("vellum mesh vbo"),
                size: (cap * std::mem::size_of::<MeshVertex>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        });
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(vertices));
    }
}

// ── tessellation ──────────────────────────────────────────────────────────

/// Appends triangles for every mesh command in paint order. Text is skipped.
pub fn tessellate(draw_list: &DrawList, out: &mut Vec<MeshVertex>) {
    for cmd in draw_list.iter() {
        match cmd {
            DrawCmd::Polygon(p) => tessellate_polygon(&p.points, p.color, out),
            DrawCmd::LineLoop(l) => tessellate_line_loop(&l.points, l.width, l.color, out),
            DrawCmd::Text(_) => {}
        }
    }
}

/// Fills a convex outline as a fan around `points[0]`.
///
/// Fewer than three points produce nothing.
pub fn tessellate_polygon(points: &[Vec2], color: Color, out: &mut Vec<MeshVertex>) {
    if points.len() < 3 {
        return;
    }
    let color = color.to_array();
    let p0 = points[0];
    for pair in points[1..].windows(2) {
        out.push(MeshVertex::new(p0, color));
        out.push(MeshVertex::new(pair[0], color));
        out.push(MeshVertex::new(pair[1], color));
    }
}

/// Strokes the closed loop through `points` with one quad per segment.
///
/// Each quad is `width` px across, centered on the segment, and extended by
/// half the width at both ends so corners are covered. Zero-length segments
/// and non-positive widths are skipped.
pub fn tessellate_line_loop(points: &[Vec2], width: f32, color: Color, out: &mut Vec<MeshVertex>) {
    if points.len() < 2 || !(width > 0.0) {
        return;
    }
    let color = color.to_array();
    let half = width * 0.5;
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        let d = b - a;
        let len = d.length();
        if len <= f32::EPSILON {
            continue;
        }
        let dir = d / len * half;
        let n = dir.perp();
        let (a, b) = (a - dir, b + dir);

        let corners = [a + n, a - n, b - n, b + n];
        for idx in [0, 1, 2, 0, 2, 3] {
            out.push(MeshVertex::new(corners[idx], color));
        }
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Position in logical px plus premultiplied color (24 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    #[inline]
    fn new(p: Vec2, color: [f32; 4]) -> Self {
        Self { pos: [p.x, p.y], color }
    }

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::FontId;

    fn red() -> Color {
        Color::from_srgb_u8(255, 0, 0)
    }

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn polygon_fan_has_n_minus_two_triangles() {
        let mut out = Vec::new();
        tessellate_polygon(&square(), red(), &mut out);
        assert_eq!(out.len(), 2 * 3);
        assert!(out.iter().all(|v| v.color == [1.0, 0.0, 0.0, 1.0]));
        // Every triangle starts at the fan pivot.
        assert!(out.chunks(3).all(|t| t[0].pos == [0.0, 0.0]));
    }

    #[test]
    fn degenerate_polygon_draws_nothing() {
        let mut out = Vec::new();
        tessellate_polygon(&square()[..2], red(), &mut out);
        tessellate_polygon(&[], red(), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn line_loop_closes_back_to_first_point() {
        let mut out = Vec::new();
        tessellate_line_loop(&square(), 4.0, red(), &mut out);
        // four segments, two triangles each
        assert_eq!(out.len(), 4 * 6);
    }

    #[test]
    fn line_loop_quad_spans_stroke_width() {
        let mut out = Vec::new();
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
        tessellate_line_loop(&pts, 4.0, red(), &mut out);
        // first segment: y spans [-2, 2], x extended by 2 on both ends
        let first = &out[..6];
        let ys: Vec<f32> = first.iter().map(|v| v.pos[1]).collect();
        let xs: Vec<f32> = first.iter().map(|v| v.pos[0]).collect();
        assert!(ys.iter().any(|&y| (y - 2.0).abs() < 1e-5));
        assert!(ys.iter().any(|&y| (y + 2.0).abs() < 1e-5));
        assert!(xs.iter().any(|&x| (x + 2.0).abs() < 1e-5));
        assert!(xs.iter().any(|&x| (x - 12.0).abs() < 1e-5));
    }

    #[test]
    fn zero_width_line_loop_draws_nothing() {
        let mut out = Vec::new();
        tessellate_line_loop(&square(), 0.0, red(), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn tessellate_keeps_paint_order_and_skips_text() {
        let mut list = DrawList::new();
        let blue = Color::from_srgb_u8(0, 0, 255);
        list.push_line_loop(square(), 2.0, blue);
        list.push_text("hi", FontId::DEFAULT, 12.0, blue, Vec2::zero());
        list.push_polygon(square(), red());

        let mut out = Vec::new();
        tessellate(&list, &mut out);
        assert_eq!(out.len(), 24 + 6);
        assert_eq!(out[0].color, blue.to_array());
        assert_eq!(out[24].color, red().to_array());
    }

    #[test]
    fn vertex_is_24_bytes() {
        assert_eq!(std::mem::size_of::<MeshVertex>(), 24);
    }
}
