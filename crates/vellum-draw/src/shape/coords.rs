use std::f32::consts::TAU;

use vellum_engine::coords::Vec2;

use super::{Vertex, ELLIPSE_POINTS};

/// `(w/2,h/2) (w,h/2) (w,h) (w/2,h)`.
///
/// This is the upper-right quarter of a `w × h` box, i.e. a `w/2 × h/2`
/// rectangle. Scripts depend on this size, so it stays.
pub fn rectangle_vertices(width: f32, height: f32) -> Vec<Vertex> {
    let (hw, hh) = (width / 2.0, height / 2.0);
    vec![
        Vec2::new(hw, hh),
        Vec2::new(width, hh),
        Vec2::new(width, height),
        Vec2::new(hw, height),
    ]
}

/// `(w/2,h) (w,h/2) (w/2,0) (0,h/2)`: top, right, bottom, left.
pub fn diamond_vertices(width: f32, height: f32) -> Vec<Vertex> {
    let (hw, hh) = (width / 2.0, height / 2.0);
    vec![
        Vec2::new(hw, height),
        Vec2::new(width, hh),
        Vec2::new(hw, 0.0),
        Vec2::new(0.0, hh),
    ]
}

/// `(0,0) (w/2,w/2) (w,0)`.
pub fn equilateral_vertices(width: f32) -> Vec<Vertex> {
    let hw = width / 2.0;
    vec![Vec2::new(0.0, 0.0), Vec2::new(hw, hw), Vec2::new(width, 0.0)]
}

/// Outline points of an ellipse around `center`.
///
/// The radii are a third of the stored dimension.
pub fn ellipse_points(dimension: Vec2, center: Vec2) -> Vec<Vertex> {
    let rx = dimension.x / 3.0;
    let ry = dimension.y / 3.0;
    (0..ELLIPSE_POINTS)
        .map(|i| {
            let theta = i as f32 * TAU / ELLIPSE_POINTS as f32;
            Vec2::new(center.x + rx * theta.cos(), center.y + ry * theta.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn rectangle_keeps_the_quarter_box() {
        assert_eq!(
            rectangle_vertices(40.0, 20.0),
            vec![
                Vec2::new(20.0, 10.0),
                Vec2::new(40.0, 10.0),
                Vec2::new(40.0, 20.0),
                Vec2::new(20.0, 20.0),
            ]
        );
    }

    #[test]
    fn diamond_points() {
        assert_eq!(
            diamond_vertices(10.0, 20.0),
            vec![
                Vec2::new(5.0, 20.0),
                Vec2::new(10.0, 10.0),
                Vec2::new(5.0, 0.0),
                Vec2::new(0.0, 10.0),
            ]
        );
    }

    #[test]
    fn equilateral_points() {
        assert_eq!(
            equilateral_vertices(30.0),
            vec![Vec2::new(0.0, 0.0), Vec2::new(15.0, 15.0), Vec2::new(30.0, 0.0)]
        );
    }

    #[test]
    fn ellipse_uses_a_third_of_the_dimension() {
        let pts = ellipse_points(Vec2::new(60.0, 30.0), Vec2::new(100.0, 100.0));
        assert_eq!(pts.len(), ELLIPSE_POINTS);
        // theta = 0 and theta = pi/2
        assert!(approx(pts[0], Vec2::new(120.0, 100.0)));
        assert!(approx(pts[ELLIPSE_POINTS / 4], Vec2::new(100.0, 110.0)));
    }
}
