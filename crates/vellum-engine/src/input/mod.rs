//! Keyboard and pointer input, independent of the windowing backend.
//!
//! The runtime translates platform events into [`InputEvent`]s and folds them
//! into an [`InputState`] before the app sees them.

pub(crate) mod platform;
mod state;
mod types;

pub use state::InputState;
pub use types::{
    InputEvent, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};
