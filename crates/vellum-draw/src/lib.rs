//! Vellum drawing model.
//!
//! Everything the editor knows about shapes lives here:
//! - `shape`: immutable shape templates and how they draw into a `DrawList`
//! - `interp`: the command language that defines templates and places objects
//! - `scene`: the live object list, selection and keyboard/pointer handling
//! - `script`: turns script text into command records
//!
//! Nothing in this crate opens a window; the studio binary wires a `Scene` to
//! the engine runtime.

pub mod color;
pub mod font;
pub mod interp;
pub mod scene;
pub mod script;
pub mod shape;

#[cfg(test)]
mod test_log;

pub use color::RgbColor;
pub use font::BitmapFont;
pub use interp::{InterpError, Interpreter};
pub use scene::{PlacedObject, Pointer, Scene};
pub use script::Record;
pub use shape::{Geometry, Shape, ShapeKind, Vertex};
