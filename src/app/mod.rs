//! Application module - the gpui view wrapping the editor.
//!
//! This module is organized into several submodules:
//! - `state` - The MockupApp struct and its sub-structs
//! - `lifecycle` - Initialization
//! - `actions` - Panel actions (upload, delete, tint, view, export)
//! - `canvas_events` - gpui mouse/wheel events to editor pointer events
//! - `frame` - Rasterized canvas frame caching
//!
//! Rendering lives in `crate::render`.

mod actions;
mod canvas_events;
mod frame;
mod lifecycle;
mod state;

pub use actions::apply_shirt_color;
pub use state::{FrameCache, MockupApp, UiState};
