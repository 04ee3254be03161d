use crate::input::{InputEvent, InputState};

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    /// Nothing visible changed.
    Continue,
    /// State changed; the runtime schedules a redraw.
    Redraw,
    /// Leave the event loop.
    Exit,
}

/// Application contract implemented by higher layers.
///
/// Redraws are invalidation-based: `on_frame` runs on first show, after a
/// resize and after any callback returns [`AppControl::Redraw`].
pub trait App {
    /// Called for every translated input event. `input` already reflects it.
    fn on_input(&mut self, event: &InputEvent, input: &InputState) -> AppControl {
        let _ = (event, input);
        AppControl::Continue
    }

    /// Called when the window's logical size changes.
    fn on_resize(&mut self, width: f32, height: f32) -> AppControl {
        let _ = (width, height);
        AppControl::Redraw
    }

    /// Called when the user asks to close the window.
    fn on_close(&mut self) -> AppControl {
        AppControl::Exit
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
