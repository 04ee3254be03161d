//! Shape templates.
//!
//! A [`Shape`] is an immutable template: geometry plus the name of the preset
//! that built it. It has no position or color; those belong to the placed
//! object that references it. Templates are shared through `Rc<Shape>`.

mod coords;
mod draw;

pub use coords::{diamond_vertices, ellipse_points, equilateral_vertices, rectangle_vertices};

use std::fmt;

use vellum_engine::coords::Vec2;

use crate::font::BitmapFont;

/// A point in editor coordinates (logical px, y up).
pub type Vertex = Vec2;

/// Number of points used to approximate an ellipse.
pub const ELLIPSE_POINTS: usize = 32;

/// The preset a template was built with. Only affects `describe()`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Text,
    Ellipse,
    Circle,
    Polygon,
    Triangle,
    Rectangle,
    Square,
    Diamond,
    Equilateral,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Text => "text",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Circle => "circle",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Diamond => "diamond",
            ShapeKind::Equilateral => "equilateral",
        }
    }
}

/// Drawable geometry of a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// `font` is `None` when the script named a font we do not know.
    Text { font: Option<BitmapFont>, text: String },
    /// Stored width/height pair.
    Ellipse { dimension: Vec2 },
    /// Vertices relative to an arbitrary local frame; drawing re-centers them
    /// on their centroid.
    Polygon { vertices: Vec<Vertex> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    geometry: Geometry,
}

impl Shape {
    pub fn text(font: Option<BitmapFont>, text: impl Into<String>) -> Self {
        Self {
            kind: ShapeKind::Text,
            geometry: Geometry::Text { font, text: text.into() },
        }
    }

    pub fn ellipse(width: f32, height: f32) -> Self {
        Self::ellipse_of(ShapeKind::Ellipse, width, height)
    }

    pub fn circle(diameter: f32) -> Self {
        Self::ellipse_of(ShapeKind::Circle, diameter, diameter)
    }

    pub fn polygon(vertices: Vec<Vertex>) -> Self {
        Self::polygon_of(ShapeKind::Polygon, vertices)
    }

    pub fn triangle(vertices: Vec<Vertex>) -> Self {
        Self::polygon_of(ShapeKind::Triangle, vertices)
    }

    pub fn rectangle(width: f32, height: f32) -> Self {
        Self::polygon_of(ShapeKind::Rectangle, rectangle_vertices(width, height))
    }

    pub fn square(width: f32) -> Self {
        Self::polygon_of(ShapeKind::Square, rectangle_vertices(width, width))
    }

    pub fn diamond(width: f32, height: f32) -> Self {
        Self::polygon_of(ShapeKind::Diamond, diamond_vertices(width, height))
    }

    pub fn equilateral(width: f32) -> Self {
        Self::polygon_of(ShapeKind::Equilateral, equilateral_vertices(width))
    }

    fn ellipse_of(kind: ShapeKind, width: f32, height: f32) -> Self {
        Self {
            kind,
            geometry: Geometry::Ellipse { dimension: Vec2::new(width, height) },
        }
    }

    fn polygon_of(kind: ShapeKind, vertices: Vec<Vertex>) -> Self {
        Self { kind, geometry: Geometry::Polygon { vertices } }
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// One-line human description, e.g. `square {(20,20) (40,20) (40,40) (20,40)}`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind.name();
        match &self.geometry {
            Geometry::Text { font, text } => match font {
                Some(font) => write!(f, "{name}: {font} \"{text}\""),
                None => write!(f, "{name}: (null) \"{text}\""),
            },
            Geometry::Ellipse { dimension } => write!(f, "{name} {{{dimension}}}"),
            Geometry::Polygon { vertices } => {
                write!(f, "{name} {{")?;
                for (i, v) in vertices.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}
