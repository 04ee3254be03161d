use vellum_engine::coords::Vec2;
use vellum_engine::paint::Color;
use vellum_engine::scene::{Border, DrawList};
use vellum_engine::text::FontId;

use super::{ellipse_points, Geometry, Shape};

impl Shape {
    /// Records this template at `center` in `color`.
    ///
    /// With `outline`, ellipses and polygons push their stroked outline before
    /// the fill. Text is never outlined, and text whose font is unknown draws
    /// nothing.
    pub fn draw(&self, list: &mut DrawList, center: Vec2, color: Color, outline: Option<Border>) {
        log::trace!(target: "vellum::shape", "draw {} at {center}", self.kind().name());

        match self.geometry() {
            Geometry::Text { font, text } => {
                let Some(font) = font else {
                    return;
                };
                list.push_text(text.as_str(), FontId::DEFAULT, font.pixel_size(), color, center);
            }

            Geometry::Ellipse { dimension } => {
                let points = ellipse_points(*dimension, center);
                if let Some(border) = outline {
                    list.push_border(points.clone(), border);
                }
                list.push_polygon(points, color);
            }

            Geometry::Polygon { vertices } => {
                let Some(centroid) = Vec2::centroid(vertices) else {
                    return;
                };
                let offset = center - centroid;
                let points: Vec<Vec2> = vertices.iter().map(|&v| v + offset).collect();
                if let Some(border) = outline {
                    list.push_border(points.clone(), border);
                }
                list.push_polygon(points, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use vellum_engine::scene::DrawCmd;

    use super::*;
    use crate::font::BitmapFont;

    fn red() -> Color {
        Color::from_srgb_u8(255, 0, 0)
    }

    fn border() -> Border {
        Border::new(4.0, Color::from_srgb_u8(0, 0, 0))
    }

    // ── polygons ──────────────────────────────────────────────────────────

    #[test]
    fn polygon_is_recentered_on_its_centroid() {
        let mut list = DrawList::new();
        Shape::square(40.0).draw(&mut list, Vec2::new(100.0, 100.0), red(), None);

        let [DrawCmd::Polygon(p)] = list.items() else {
            panic!("expected one polygon, got {:?}", list.items());
        };
        assert_eq!(Vec2::centroid(&p.points), Some(Vec2::new(100.0, 100.0)));
        // square 40 is a 20 x 20 box
        assert_eq!(p.points[0], Vec2::new(90.0, 90.0));
        assert_eq!(p.points[2], Vec2::new(110.0, 110.0));
    }

    #[test]
    fn outline_is_pushed_before_fill() {
        let mut list = DrawList::new();
        Shape::diamond(10.0, 10.0).draw(&mut list, Vec2::zero(), red(), Some(border()));
        assert!(matches!(list.items()[0], DrawCmd::LineLoop(ref l) if l.width == 4.0));
        assert!(matches!(list.items()[1], DrawCmd::Polygon(_)));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn empty_polygon_draws_nothing() {
        let mut list = DrawList::new();
        Shape::polygon(Vec::new()).draw(&mut list, Vec2::zero(), red(), Some(border()));
        assert!(list.is_empty());
    }

    // ── ellipses ──────────────────────────────────────────────────────────

    #[test]
    fn ellipse_outline_and_fill_share_points() {
        let mut list = DrawList::new();
        Shape::circle(30.0).draw(&mut list, Vec2::new(50.0, 50.0), red(), Some(border()));
        let (DrawCmd::LineLoop(l), DrawCmd::Polygon(p)) = (&list.items()[0], &list.items()[1]) else {
            panic!("expected outline then fill");
        };
        assert_eq!(l.points, p.points);
        assert_eq!(p.points.len(), 32);
    }

    // ── text ──────────────────────────────────────────────────────────────

    #[test]
    fn text_is_never_outlined() {
        let mut list = DrawList::new();
        let shape = Shape::text(Some(BitmapFont::TimesRoman24), "hi");
        shape.draw(&mut list, Vec2::new(5.0, 6.0), red(), Some(border()));
        let [DrawCmd::Text(t)] = list.items() else {
            panic!("expected a single text command");
        };
        assert_eq!(t.size, 24.0);
        assert_eq!(t.origin, Vec2::new(5.0, 6.0));
        assert_eq!(t.text, "hi");
    }

    #[test]
    fn null_font_draws_nothing() {
        let mut list = DrawList::new();
        Shape::text(None, "hi").draw(&mut list, Vec2::zero(), red(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn drawing_does_not_change_the_template() {
        let shapes = [
            Shape::text(Some(BitmapFont::Fixed8x13), "a b"),
            Shape::ellipse(10.0, 20.0),
            Shape::equilateral(12.0),
            Shape::triangle(vec![Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(0.0, 4.0)]),
        ];
        for shape in shapes {
            let before = shape.clone();
            let mut list = DrawList::new();
            shape.draw(&mut list, Vec2::new(7.0, 9.0), red(), Some(border()));
            let _ = shape.describe();
            assert_eq!(shape, before);
        }
    }
}
