use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Filled polygon payload.
///
/// Points are in logical pixels and are expected to describe a convex outline;
/// the mesh renderer fills it as a triangle fan around the first point.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub color: Color,
}

impl DrawList {
    /// Records a filled polygon.
    #[inline]
    pub fn push_polygon(&mut self, points: Vec<Vec2>, color: Color) {
        self.push(DrawCmd::Polygon(PolygonCmd { points, color }));
    }
}
