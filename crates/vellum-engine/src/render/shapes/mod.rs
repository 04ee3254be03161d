//! Shape renderers.

mod atlas;
mod common;

pub mod mesh;
pub mod text;
