//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the editor: input, resize and close notifications plus a per-frame context
//! used to draw.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
