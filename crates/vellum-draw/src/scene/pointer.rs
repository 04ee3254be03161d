use vellum_engine::coords::Vec2;
use vellum_engine::core::AppControl;
use vellum_engine::input::MouseButton;
use vellum_engine::scene::DrawList;
use vellum_engine::text::FontId;

use crate::color::RgbColor;
use crate::font::BitmapFont;

use super::Scene;

/// Bottom-left corner of the pointer readout.
const HUD_ORIGIN: Vec2 = Vec2::new(10.0, 10.0);
const HUD_FONT: BitmapFont = BitmapFont::Helvetica18;

/// Last known pointer state, in window coordinates (origin top-left).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
    pub entered: bool,
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl Pointer {
    /// `(x,y)` with y measured from the bottom, then `L`/`M`/`R` for held buttons.
    pub fn readout(&self, height: f32) -> String {
        let mut text = format!("({},{})", self.x.round() as i32, (height - self.y).round() as i32);
        for (down, tag) in [(self.left, 'L'), (self.middle, 'M'), (self.right, 'R')] {
            if down {
                text.push(tag);
            }
        }
        text
    }
}

impl Scene {
    /// Pointer moved, with or without a button held.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> AppControl {
        log::trace!(target: "vellum::graphics", "x={x}, y={y}");
        self.pointer.x = x;
        self.pointer.y = y;
        AppControl::Redraw
    }

    /// Only left, middle and right are tracked.
    pub fn button_state(&mut self, button: MouseButton, pressed: bool) -> AppControl {
        log::debug!(target: "vellum::graphics", "button={button:?}, pressed={pressed}");
        match button {
            MouseButton::Left => self.pointer.left = pressed,
            MouseButton::Middle => self.pointer.middle = pressed,
            MouseButton::Right => self.pointer.right = pressed,
            _ => {}
        }
        AppControl::Redraw
    }

    /// Pointer entered (`true`) or left (`false`) the window.
    pub fn entry(&mut self, entered: bool) -> AppControl {
        log::debug!(target: "vellum::graphics", "mouse_entered={entered}");
        self.pointer.entered = entered;
        if entered {
            log::debug!(
                target: "vellum::graphics",
                "width={}, height={}",
                self.width,
                self.height
            );
        }
        AppControl::Redraw
    }

    pub(super) fn draw_pointer(&self, list: &mut DrawList) {
        if !self.pointer.entered {
            return;
        }
        list.push_text(
            self.pointer.readout(self.height),
            FontId::DEFAULT,
            HUD_FONT.pixel_size(),
            RgbColor::GREEN.to_color(),
            HUD_ORIGIN,
        );
    }
}

#[cfg(test)]
mod tests {
    use vellum_engine::scene::DrawCmd;

    use super::*;

    #[test]
    fn readout_flips_y_and_lists_buttons() {
        let p = Pointer { x: 12.0, y: 80.0, left: true, right: true, ..Pointer::default() };
        assert_eq!(p.readout(480.0), "(12,400)LR");
    }

    #[test]
    fn hud_only_while_pointer_is_inside() {
        let mut scene = Scene::new();
        let mut list = DrawList::new();

        scene.pointer_move(5.0, 470.0);
        scene.render(&mut list);
        assert!(list.is_empty());

        assert_eq!(scene.entry(true), AppControl::Redraw);
        scene.render(&mut list);
        let [DrawCmd::Text(t)] = list.items() else {
            panic!("expected the pointer readout");
        };
        assert_eq!(t.text, "(5,10)");
        assert_eq!(t.origin, HUD_ORIGIN);
        assert_eq!(t.size, 18.0);

        scene.entry(false);
        scene.render(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn buttons_update_readout_only() {
        let mut scene = Scene::new();
        scene.button_state(MouseButton::Middle, true);
        scene.button_state(MouseButton::Back, true);
        assert!(scene.pointer().middle);
        assert!(!scene.pointer().left);
        scene.button_state(MouseButton::Middle, false);
        assert!(!scene.pointer().middle);
        assert!(scene.objects().is_empty());
    }
}
