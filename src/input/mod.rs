//! Pointer and wheel input handling for the mockup canvas.
//!
//! This module implements all pointer interaction logic: artwork selection,
//! move/scale/rotate gestures via the selection handles, middle-button
//! panning and wheel zoom.
//!
//! ## Architecture
//!
//! The selection controller uses an explicit state machine (`EditorState`)
//! to track whether an artwork is selected and whether a gesture is in
//! progress. Handlers are `impl Editor` blocks taking toolkit-independent
//! `PointerEvent`s in canvas coordinates; `coords` converts gpui window
//! positions into those.
//!
//! ## Modules
//!
//! - `state` - Editor state machine enum and transform session
//! - `handles` - Selection handle geometry and hit-testing
//! - `mouse_down` - Pointer down handling (selection, gesture start, pan start)
//! - `drag` - Pointer move handling (move/scale/rotate updates, panning)
//! - `mouse_up` - Pointer up handling (gesture end)
//! - `transform` - Wheel zoom
//! - `coords` - Window to canvas coordinate conversion

pub mod coords;
mod drag;
mod handles;
mod mouse_down;
mod mouse_up;
mod state;
mod transform;

pub use handles::{HandleKind, SelectionHandles};
pub use state::{EditorState, TransformMode, TransformSession};

use crate::geometry::Vec2;

/// Mouse button, independent of the windowing toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// A pointer event in canvas coordinates (pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Vec2,
    /// Button pressed or released; for moves, the button held down
    pub button: Option<PointerButton>,
}

impl PointerEvent {
    pub fn new(position: Vec2, button: Option<PointerButton>) -> Self {
        Self { position, button }
    }

    pub fn primary(x: f32, y: f32) -> Self {
        Self::new(Vec2::new(x, y), Some(PointerButton::Primary))
    }

    pub fn middle(x: f32, y: f32) -> Self {
        Self::new(Vec2::new(x, y), Some(PointerButton::Middle))
    }

    /// Move with no button held.
    pub fn hover(x: f32, y: f32) -> Self {
        Self::new(Vec2::new(x, y), None)
    }
}
