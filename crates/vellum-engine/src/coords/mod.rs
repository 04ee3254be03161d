//! Coordinate and geometry types shared across engine renderers and the editor.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin bottom-left
//! - +X right, +Y up
//!
//! This is the orthographic `[0, width] × [0, height]` projection the editor
//! draws in. Renderers convert to NDC in shaders using a viewport uniform.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
