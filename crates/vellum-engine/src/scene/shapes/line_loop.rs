use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::Border;

/// Closed outline payload: segments join each point to the next and the last
/// point back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLoopCmd {
    pub points: Vec<Vec2>,
    /// Stroke width in logical pixels.
    pub width: f32,
    pub color: Color,
}

impl DrawList {
    /// Records a closed outline.
    #[inline]
    pub fn push_line_loop(&mut self, points: Vec<Vec2>, width: f32, color: Color) {
        self.push(DrawCmd::LineLoop(LineLoopCmd { points, width, color }));
    }

    /// Records a closed outline using a [`Border`]'s width and color.
    #[inline]
    pub fn push_border(&mut self, points: Vec<Vec2>, border: Border) {
        self.push_line_loop(points, border.width, border.color);
    }
}
