//! Pointer move handling - gesture updates and panning.
//!
//! Every update derives the new transform from the session snapshot, never
//! from the previous update, so the result depends only on the current
//! pointer position. Handles are recomputed after each step.

use super::state::{TransformMode, TransformSession};
use super::{EditorState, PointerButton, PointerEvent};
use crate::constants::MIN_ARTWORK_SCALE;
use crate::editor::Editor;
use crate::geometry::Vec2;
use crate::profile_scope;
use crate::types::ArtTransform;

impl Editor {
    /// Handle pointer motion. Returns true if the editor changed.
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) -> bool {
        profile_scope!("handle_pointer_move");

        if let Some(anchor) = self.pan_anchor {
            if event.button == Some(PointerButton::Middle) {
                self.camera.pan_by_screen(event.position - anchor);
                self.pan_anchor = Some(event.position);
                self.mark_dirty();
                return true;
            }
        }

        let EditorState::Transforming { art, session } = self.state else {
            return false;
        };
        let world = self.camera.screen_to_world(event.position);
        let Some(artwork) = self.scene.artwork_mut(art) else {
            return false;
        };
        artwork.transform = apply_gesture(&session, world);
        self.refresh_handles();
        true
    }
}

/// New artwork transform for a pointer at `world` during `session`.
pub(crate) fn apply_gesture(session: &TransformSession, world: Vec2) -> ArtTransform {
    let initial = session.initial;
    match session.mode {
        TransformMode::Move => ArtTransform {
            position: initial.position + (world - session.initial_pointer),
            ..initial
        },
        TransformMode::Scale => {
            let distance = session.initial_center.distance(world);
            let mut factor = distance / session.initial_distance;
            if !factor.is_finite() || factor == 0.0 {
                factor = 1.0;
            }
            ArtTransform {
                scale: (initial.scale * factor).max(MIN_ARTWORK_SCALE),
                ..initial
            }
        }
        TransformMode::Rotate => {
            let angle = session.initial_center.angle_to(world);
            ArtTransform {
                rotation: initial.rotation + (angle - session.initial_angle),
                ..initial
            }
        }
    }
}
