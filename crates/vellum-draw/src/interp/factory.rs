//! Shape factories for `define <name> <type> <args...>`.

use std::collections::HashMap;

use vellum_engine::coords::Vec2;

use crate::font::BitmapFont;
use crate::shape::Shape;

use super::error::{InterpError, Result};

/// Builds a template from the tokens after the shape type.
pub(crate) type FactoryFn = fn(&[String]) -> Result<Shape>;

pub(crate) fn factory_table() -> HashMap<&'static str, FactoryFn> {
    let entries: [(&'static str, FactoryFn); 9] = [
        ("text", make_text),
        ("circle", make_circle),
        ("diamond", make_diamond),
        ("ellipse", make_ellipse),
        ("equilateral", make_equilateral),
        ("polygon", make_polygon),
        ("rectangle", make_rectangle),
        ("square", make_square),
        ("triangle", make_triangle),
    ];
    entries.into_iter().collect()
}

/// Token at `i`, or a syntax error when the record is too short.
pub(crate) fn arg(args: &[String], i: usize) -> Result<&str> {
    args.get(i).map(String::as_str).ok_or(InterpError::Syntax)
}

/// Parses a finite `f32`.
pub(crate) fn number(tok: &str) -> Result<f32> {
    tok.parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InterpError::InvalidNumber(tok.to_string()))
}

fn number_arg(args: &[String], i: usize) -> Result<f32> {
    number(arg(args, i)?)
}

fn make_text(args: &[String]) -> Result<Shape> {
    log::debug!(target: "vellum::factory", "text {args:?}");
    let name = arg(args, 0)?;
    if args.len() < 2 {
        return Err(InterpError::Syntax);
    }
    let font = BitmapFont::from_name(name);
    if font.is_none() {
        log::warn!(target: "vellum::factory", "{name}: unknown font");
    }
    Ok(Shape::text(font, args[1..].join(" ")))
}

fn make_ellipse(args: &[String]) -> Result<Shape> {
    log::debug!(target: "vellum::factory", "ellipse {args:?}");
    Ok(Shape::ellipse(number_arg(args, 0)?, number_arg(args, 1)?))
}

fn make_circle(args: &[String]) -> Result<Shape> {
    log::debug!(target: "vellum::factory", "circle {args:?}");
    Ok(Shape::circle(number_arg(args, 0)?))
}

fn make_polygon(args: &[String]) -> Result<Shape> {
    log::debug!(target: "vellum::factory", "polygon {args:?}");
    Ok(Shape::polygon(vertex_list(args)?))
}

fn make_triangle(args: &[String]) -> Result<Shape> {
    log::debug!(target: "vellum::factory", "triangle {args:?}");
    Ok(Shape::triangle(vertex_list(args)?))
}

fn make_rectangle(args: &[String]) -> Result<Shape> {
    log::debug!(target: "vellum::factory", "rectangle {args:?}");
    Ok(Shape::rectangle(number_arg(args, 0)?, number_arg(args, 1)?))
}

fn make_square(args: &[String]) -> Result<Shape> {
    log::debug!(target: "vellum::factory", "square {args:?}");
    Ok(Shape::square(number_arg(args, 0)?))
}

fn make_diamond(args: &[String]) -> Result<Shape> {
    log::debug!(target: "vellum::factory", "diamond {args:?}");
    Ok(Shape::diamond(number_arg(args, 0)?, number_arg(args, 1)?))
}

fn make_equilateral(args: &[String]) -> Result<Shape> {
    log::debug!(target: "vellum::factory", "equilateral {args:?}");
    Ok(Shape::equilateral(number_arg(args, 0)?))
}

/// `x0 y0 x1 y1 ...` in record order.
fn vertex_list(args: &[String]) -> Result<Vec<Vec2>> {
    if args.len() % 2 != 0 {
        return Err(InterpError::OddCoordinates(args.len()));
    }
    args.chunks_exact(2)
        .map(|pair| Ok(Vec2::new(number(&pair[0])?, number(&pair[1])?)))
        .collect()
}
