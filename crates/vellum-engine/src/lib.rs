//! Vellum engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the editor:
//! one window, its event loop, a renderer-agnostic draw list, and the
//! renderers that turn that list into pixels.

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
