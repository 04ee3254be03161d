//! Colors shared by draw commands and renderers.

pub mod color;

pub use color::Color;
