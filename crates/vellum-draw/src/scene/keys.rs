use vellum_engine::coords::Vec2;
use vellum_engine::core::AppControl;
use vellum_engine::input::Key;

use super::Scene;

/// Distance past an edge before an object reappears on the other side.
pub const OFFSCREEN_GUARD: f32 = 50.0;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    fn delta(self, step: f32) -> Vec2 {
        match self {
            Direction::Left => Vec2::new(-step, 0.0),
            Direction::Right => Vec2::new(step, 0.0),
            Direction::Up => Vec2::new(0.0, step),
            Direction::Down => Vec2::new(0.0, -step),
        }
    }
}

impl Scene {
    /// Routes a pressed key to [`key_press`](Self::key_press) or
    /// [`special_key_press`](Self::special_key_press).
    pub fn handle_key(&mut self, key: Key) -> AppControl {
        if key.is_special() {
            self.special_key_press(key)
        } else {
            self.key_press(key)
        }
    }

    /// Ordinary keys: `hjkl` move, `n`/space/tab and `p`/backspace cycle the
    /// selection, digits select by index, `q`/Escape quit.
    pub fn key_press(&mut self, key: Key) -> AppControl {
        log::debug!(target: "vellum::graphics", "key={key}");
        self.selected = true;

        match key {
            Key::Q | Key::Escape => return AppControl::Exit,
            Key::H => self.move_selected(Direction::Left),
            Key::J => self.move_selected(Direction::Down),
            Key::K => self.move_selected(Direction::Up),
            Key::L => self.move_selected(Direction::Right),
            Key::N | Key::Space | Key::Tab => self.select_next(),
            Key::P | Key::Backspace => self.select_prev(),
            _ => match key.digit() {
                Some(k) => self.select_index(k),
                None => log::warn!(target: "vellum::graphics", "{key}: invalid keystroke"),
            },
        }

        AppControl::Redraw
    }

    /// Arrow keys move, `F1`–`F12` select indices 1–12.
    pub fn special_key_press(&mut self, key: Key) -> AppControl {
        log::debug!(target: "vellum::graphics", "special key={key}");
        self.selected = true;

        match key {
            Key::ArrowLeft => self.move_selected(Direction::Left),
            Key::ArrowDown => self.move_selected(Direction::Down),
            Key::ArrowUp => self.move_selected(Direction::Up),
            Key::ArrowRight => self.move_selected(Direction::Right),
            _ => match key.function_number() {
                Some(k) => self.select_index(k),
                None => log::warn!(target: "vellum::graphics", "{key}: invalid function key"),
            },
        }

        AppControl::Redraw
    }

    /// Moves the selected object one step, then applies that direction's
    /// off-screen guard.
    pub fn move_selected(&mut self, dir: Direction) {
        let delta = dir.delta(self.move_by);
        let (width, height) = (self.width, self.height);
        let Some(obj) = self.objects.get_mut(self.selected_obj) else {
            log::warn!(target: "vellum::graphics", "no object to move");
            return;
        };
        obj.translate(delta);
        obj.set_position(recover_offscreen(dir, obj.position(), width, height));
    }

    pub fn select_next(&mut self) {
        if self.objects.is_empty() {
            log::warn!(target: "vellum::graphics", "no objects to select");
            return;
        }
        self.selected_obj = (self.selected_obj + 1) % self.objects.len();
        self.selected = true;
    }

    pub fn select_prev(&mut self) {
        if self.objects.is_empty() {
            log::warn!(target: "vellum::graphics", "no objects to select");
            return;
        }
        self.selected_obj = match self.selected_obj {
            0 => self.objects.len() - 1,
            i => i - 1,
        };
        self.selected = true;
    }

    /// Selects object `k`, or falls back to object 0 without highlighting.
    pub fn select_index(&mut self, k: usize) {
        if k < self.objects.len() {
            self.selected_obj = k;
            self.selected = true;
        } else {
            log::warn!(target: "vellum::graphics", "object does not exist at {k}");
            self.selected_obj = 0;
            self.selected = false;
        }
    }
}

/// One guard per direction, checked only on the axis that moved:
/// left `x < -50 → width`, right `x > width+50 → 0`,
/// down `y > height+50 → 0`, up `y < -50 → height`.
fn recover_offscreen(dir: Direction, mut p: Vec2, width: f32, height: f32) -> Vec2 {
    match dir {
        Direction::Left if p.x < -OFFSCREEN_GUARD => p.x = width,
        Direction::Right if p.x > width + OFFSCREEN_GUARD => p.x = 0.0,
        Direction::Down if p.y > height + OFFSCREEN_GUARD => p.y = 0.0,
        Direction::Up if p.y < -OFFSCREEN_GUARD => p.y = height,
        _ => {}
    }
    p
}
