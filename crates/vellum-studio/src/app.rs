use vellum_draw::Scene;
use vellum_engine::core::{App, AppControl, FrameCtx};
use vellum_engine::input::{
    InputEvent, InputState, KeyState, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};
use vellum_engine::render::shapes::mesh::MeshRenderer;
use vellum_engine::render::shapes::text::TextRenderer;
use vellum_engine::scene::DrawList;
use vellum_engine::text::FontSystem;

/// Connects a loaded [`Scene`] to the engine runtime.
pub struct SceneApp {
    scene: Scene,
    draw_list: DrawList,
    fonts: FontSystem,
    mesh: MeshRenderer,
    text: TextRenderer,
}

impl SceneApp {
    pub fn new(scene: Scene, fonts: FontSystem) -> Self {
        Self {
            scene,
            draw_list: DrawList::new(),
            fonts,
            mesh: MeshRenderer::new(),
            text: TextRenderer::new(),
        }
    }

    /// Translates one engine event into scene callbacks.
    ///
    /// Never closes the process; the caller decides what `Exit` means.
    fn dispatch(&mut self, event: &InputEvent) -> AppControl {
        match *event {
            // OS key repeat counts as another press.
            InputEvent::Key { key, state: KeyState::Pressed, .. } => self.scene.handle_key(key),
            InputEvent::Key { .. } => AppControl::Continue,
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => self.scene.pointer_move(x, y),
            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.scene.pointer_move(x, y);
                self.scene.button_state(button, state == MouseButtonState::Pressed)
            }
            InputEvent::PointerEntered => self.scene.entry(true),
            InputEvent::PointerLeft => self.scene.entry(false),
            InputEvent::Focused(_) => AppControl::Continue,
        }
    }
}

impl App for SceneApp {
    fn on_input(&mut self, event: &InputEvent, _input: &InputState) -> AppControl {
        match self.dispatch(event) {
            AppControl::Exit => self.scene.close(),
            control => control,
        }
    }

    fn on_resize(&mut self, width: f32, height: f32) -> AppControl {
        self.scene.reshape(width, height)
    }

    fn on_close(&mut self) -> AppControl {
        self.scene.close()
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.scene.render(&mut self.draw_list);

        let (draw_list, fonts, mesh, text) =
            (&self.draw_list, &self.fonts, &mut self.mesh, &mut self.text);

        ctx.render_in(self.scene.viewport(), self.scene.background(), |rctx, target| {
            mesh.render(rctx, target, draw_list);
            if !fonts.is_empty() {
                text.render(rctx, target, draw_list, fonts);
            }
        })
    }
}
