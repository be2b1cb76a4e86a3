//! Editor state machine - selection and transform gestures.
//!
//! Replaces scattered `is_transforming` / `mode` / `selected` flags with a
//! single tagged state, so a transform without a selected artwork cannot be
//! represented.
//!
//! ## State Transitions
//!
//! ```text
//! Idle         -> Selected       (primary down on an artwork, edit mode)
//! Selected     -> Selected       (primary down on another artwork)
//! Selected     -> Transforming   (primary down on scale handle, rotate handle or bounds)
//! Selected     -> Idle           (primary down on nothing, delete, view/mode switch)
//! Transforming -> Selected       (pointer up, unconditionally)
//! ```

use crate::geometry::Vec2;
use crate::types::{ArtTransform, ArtworkId};
use serde::Serialize;

/// Which gesture a transform session performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    Move,
    Scale,
    Rotate,
}

/// Values frozen when a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSession {
    pub mode: TransformMode,
    /// Pointer position in world space at pointer down
    pub initial_pointer: Vec2,
    /// Artwork transform (position in container space) at pointer down
    pub initial: ArtTransform,
    /// Artwork center in world space at pointer down
    pub initial_center: Vec2,
    /// Distance from the artwork center to the pointer
    pub initial_distance: f32,
    /// Angle from the artwork center to the pointer
    pub initial_angle: f32,
}

impl TransformSession {
    pub fn new(
        mode: TransformMode,
        pointer: Vec2,
        initial: ArtTransform,
        center: Vec2,
    ) -> Self {
        Self {
            mode,
            initial_pointer: pointer,
            initial,
            initial_center: center,
            initial_distance: center.distance(pointer),
            initial_angle: center.angle_to(pointer),
        }
    }
}

/// Unified selection/transform state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditorState {
    /// Nothing selected
    #[default]
    Idle,

    /// One artwork selected, handles visible
    Selected { art: ArtworkId },

    /// A gesture is in progress on the selected artwork
    Transforming {
        art: ArtworkId,
        session: TransformSession,
    },
}

impl EditorState {
    /// The selected artwork, if any (also while transforming)
    pub fn selected(&self) -> Option<ArtworkId> {
        match self {
            Self::Idle => None,
            Self::Selected { art } | Self::Transforming { art, .. } => Some(*art),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_transforming(&self) -> bool {
        matches!(self, Self::Transforming { .. })
    }

    /// Mode of the active gesture, if any
    pub fn mode(&self) -> Option<TransformMode> {
        self.session().map(|s| s.mode)
    }

    pub fn session(&self) -> Option<&TransformSession> {
        match self {
            Self::Transforming { session, .. } => Some(session),
            _ => None,
        }
    }

    /// Select `art`, dropping any gesture in progress
    pub fn select(&mut self, art: ArtworkId) {
        *self = Self::Selected { art };
    }

    /// Begin a gesture on the current selection. No-op without a selection.
    pub fn start_transform(&mut self, session: TransformSession) {
        if let Some(art) = self.selected() {
            *self = Self::Transforming { art, session };
        }
    }

    /// End the active gesture, keeping the selection
    pub fn end_transform(&mut self) {
        if let Self::Transforming { art, .. } = *self {
            *self = Self::Selected { art };
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
