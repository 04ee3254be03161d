pub(crate) mod line_loop;
pub(crate) mod polygon;
pub(crate) mod text;

pub use line_loop::LineLoopCmd;
pub use polygon::PolygonCmd;
pub use text::TextCmd;

use crate::paint::Color;

/// Stroke drawn along the outline of a shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
