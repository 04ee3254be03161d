use crate::paint::Color;

/// An acquired surface texture with its command encoder.
///
/// Holding a frame blocks acquisition of the next one; hand it back to
/// [`Gpu::present`](super::Gpu::present) as soon as recording is done.
pub struct GpuFrame {
    pub(super) surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

impl GpuFrame {
    /// Records a pass that clears the whole frame to `color`.
    pub fn clear(&mut self, color: Color) {
        let _pass = self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("vellum clear"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &self.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_value(color)),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
    }
}

fn clear_value(c: Color) -> wgpu::Color {
    wgpu::Color {
        r: c.r as f64,
        g: c.g as f64,
        b: c.b as f64,
        a: c.a as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_gray_widens_exactly() {
        let c = clear_value(Color::from_premul(0.25, 0.25, 0.25, 1.0));
        assert_eq!((c.r, c.g, c.b, c.a), (0.25, 0.25, 0.25, 1.0));
    }
}
