use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{Key as LogicalKey, NamedKey, PhysicalKey};
use winit::window::Window;

use crate::input::{
    InputEvent, InputState, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent,
    PointerMoveEvent,
};

/// `None` for window events that carry no input.
pub(crate) fn translate_window_event(
    window: &Window,
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    let ev = match event {
        WindowEvent::Focused(f) => InputEvent::Focused(*f),
        WindowEvent::CursorEntered { .. } => InputEvent::PointerEntered,
        WindowEvent::CursorLeft { .. } => InputEvent::PointerLeft,
        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = logical_position(window, *position);
            InputEvent::PointerMoved(PointerMoveEvent { x, y })
        }
        WindowEvent::MouseInput { state: st, button, .. } => {
            // Button events carry no position in winit 0.30.
            let (x, y) = state.pointer_pos.unwrap_or_default();
            InputEvent::PointerButton(PointerButtonEvent {
                button: mouse_button(*button),
                state: match st {
                    ElementState::Pressed => MouseButtonState::Pressed,
                    ElementState::Released => MouseButtonState::Released,
                },
                x,
                y,
            })
        }
        WindowEvent::KeyboardInput { event, .. } => key_event(event),
        _ => return None,
    };
    Some(ev)
}

fn key_event(event: &KeyEvent) -> InputEvent {
    let code = match event.physical_key {
        PhysicalKey::Code(code) => code as u32,
        PhysicalKey::Unidentified(_) => 0,
    };
    InputEvent::Key {
        key: logical_key(&event.logical_key).unwrap_or(Key::Unknown(code)),
        state: match event.state {
            ElementState::Pressed => KeyState::Pressed,
            ElementState::Released => KeyState::Released,
        },
        code,
        repeat: event.repeat,
    }
}

/// Keys are taken from the active layout, so `q` on an AZERTY board is `Q`.
fn logical_key(key: &LogicalKey) -> Option<Key> {
    match key {
        LogicalKey::Character(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::from_char(c),
                _ => None,
            }
        }
        LogicalKey::Named(named) => named_key(*named),
        _ => None,
    }
}

fn named_key(named: NamedKey) -> Option<Key> {
    let key = match named {
        NamedKey::Escape => Key::Escape,
        NamedKey::Enter => Key::Enter,
        NamedKey::Tab => Key::Tab,
        NamedKey::Backspace => Key::Backspace,
        NamedKey::Space => Key::Space,
        NamedKey::Delete => Key::Delete,
        NamedKey::Insert => Key::Insert,
        NamedKey::Home => Key::Home,
        NamedKey::End => Key::End,
        NamedKey::PageUp => Key::PageUp,
        NamedKey::PageDown => Key::PageDown,
        NamedKey::ArrowUp => Key::ArrowUp,
        NamedKey::ArrowDown => Key::ArrowDown,
        NamedKey::ArrowLeft => Key::ArrowLeft,
        NamedKey::ArrowRight => Key::ArrowRight,
        NamedKey::Shift => Key::Shift,
        NamedKey::Control => Key::Control,
        NamedKey::Alt => Key::Alt,
        NamedKey::Super | NamedKey::Meta => Key::Meta,
        NamedKey::F1 => Key::F1,
        NamedKey::F2 => Key::F2,
        NamedKey::F3 => Key::F3,
        NamedKey::F4 => Key::F4,
        NamedKey::F5 => Key::F5,
        NamedKey::F6 => Key::F6,
        NamedKey::F7 => Key::F7,
        NamedKey::F8 => Key::F8,
        NamedKey::F9 => Key::F9,
        NamedKey::F10 => Key::F10,
        NamedKey::F11 => Key::F11,
        NamedKey::F12 => Key::F12,
        _ => return None,
    };
    Some(key)
}

fn logical_position(window: &Window, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f32>(window.scale_factor());
    (logical.x, logical.y)
}

fn mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_characters_map_through_layout() {
        assert_eq!(logical_key(&LogicalKey::Character("Q".into())), Some(Key::Q));
        assert_eq!(logical_key(&LogicalKey::Character("5".into())), Some(Key::Digit5));
        assert_eq!(logical_key(&LogicalKey::Character("ab".into())), None);
        assert_eq!(logical_key(&LogicalKey::Character("+".into())), None);
    }

    #[test]
    fn named_keys_cover_arrows_and_function_row() {
        assert_eq!(logical_key(&LogicalKey::Named(NamedKey::ArrowLeft)), Some(Key::ArrowLeft));
        assert_eq!(logical_key(&LogicalKey::Named(NamedKey::F12)), Some(Key::F12));
        assert_eq!(logical_key(&LogicalKey::Named(NamedKey::Space)), Some(Key::Space));
        assert_eq!(logical_key(&LogicalKey::Named(NamedKey::CapsLock)), None);
    }
}
