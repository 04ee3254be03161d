use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::InputState;
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};

use super::app::AppControl;

/// The window being drawn.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

impl WindowCtx<'_> {
    /// Inner size in logical pixels.
    pub fn logical_size(&self) -> (f32, f32) {
        let size: winit::dpi::LogicalSize<f32> =
            self.window.inner_size().to_logical(self.window.scale_factor());
        (size.width, size.height)
    }

    fn logical_viewport(&self) -> Viewport {
        let (w, h) = self.logical_size();
        Viewport::new(w, h)
    }
}

/// Handed to [`App::on_frame`](super::App::on_frame).
///
/// `'a` is the callback, `'w` the window borrow held by [`Gpu`].
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub input: &'a InputState,
}

impl FrameCtx<'_, '_> {
    /// Draws one frame projected over the window's logical size.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let viewport = self.window.logical_viewport();
        self.render_in(viewport, clear, draw)
    }

    /// Clears to `clear`, lets `draw` record passes, then presents.
    ///
    /// `viewport` is the orthographic projection `[0, width] × [0, height]`
    /// stretched over the whole surface; an invalid one falls back to the
    /// logical window size. Surface loss maps to `Redraw`, out-of-memory to
    /// `Exit`.
    pub fn render_in<F>(&mut self, viewport: Viewport, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let viewport = if viewport.is_valid() {
            viewport
        } else {
            self.window.logical_viewport()
        };

        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                return match self.gpu.recover(err) {
                    SurfaceErrorAction::Fatal => AppControl::Exit,
                    SurfaceErrorAction::Reconfigured => AppControl::Redraw,
                    SurfaceErrorAction::SkipFrame => AppControl::Continue,
                };
            }
        };
        frame.clear(clear);

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            viewport,
            self.window.window.scale_factor() as f32,
        );
        draw(&rctx, &mut RenderTarget::new(&mut frame.encoder, &frame.view));

        self.window.window.pre_present_notify();
        self.gpu.present(frame);
        AppControl::Continue
    }
}
