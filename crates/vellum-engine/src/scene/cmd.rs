use crate::scene::shapes::line_loop::LineLoopCmd;
use crate::scene::shapes::polygon::PolygonCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach a renderer under `render::shapes::*` to consume it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Polygon(PolygonCmd),
    LineLoop(LineLoopCmd),
    Text(TextCmd),
}
