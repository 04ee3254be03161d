//! Font loading for the text renderer.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
