use std::collections::HashSet;

use super::types::{
    InputEvent,
    Key,
    KeyState,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for the window.
///
/// Holds "is down" information, pointer position, and whether the pointer is
/// over the window surface.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Whether the pointer is inside the window surface.
    pub pointer_inside: bool,

    /// Pointer position in window coordinates (logical pixels, origin top-left).
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // On focus loss, clear "down" sets so nothing sticks.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
                self.pointer_inside = true;
            }

            InputEvent::PointerEntered => {
                self.pointer_inside = true;
            }

            InputEvent::PointerLeft => {
                self.pointer_inside = false;
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    self.keys_down.insert(*key);
                }
                KeyState::Released => {
                    self.keys_down.remove(key);
                }
            },

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some((*x, *y));

                match state {
                    MouseButtonState::Pressed => {
                        self.buttons_down.insert(*button);
                    }
                    MouseButtonState::Released => {
                        self.buttons_down.remove(button);
                    }
                }
            }
        }
    }

    /// Helper queries
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: MouseButton) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state: MouseButtonState::Pressed,
            x: 3.0,
            y: 4.0,
        })
    }

    #[test]
    fn button_press_and_release_tracks_down_set() {
        let mut st = InputState::default();
        st.apply_event(&press(MouseButton::Left));
        assert!(st.button_down(MouseButton::Left));
        assert_eq!(st.pointer_pos, Some((3.0, 4.0)));

        st.apply_event(&InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Released,
            x: 3.0,
            y: 4.0,
        }));
        assert!(!st.button_down(MouseButton::Left));
    }

    #[test]
    fn enter_and_leave_toggle_inside() {
        let mut st = InputState::default();
        st.apply_event(&InputEvent::PointerEntered);
        assert!(st.pointer_inside);
        st.apply_event(&InputEvent::PointerLeft);
        assert!(!st.pointer_inside);
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut st = InputState::default();
        st.apply_event(&InputEvent::Key {
            key: Key::L,
            state: KeyState::Pressed,
            code: 0,
            repeat: false,
        });
        st.apply_event(&press(MouseButton::Right));
        st.apply_event(&InputEvent::Focused(false));
        assert!(!st.key_down(Key::L));
        assert!(!st.button_down(MouseButton::Right));
    }
}
