//! Pointer down handling - selection, gesture start, pan start.
//!
//! A primary press runs three steps in order, mirroring how the canvas
//! dispatches to the artwork under the pointer before the scene:
//!
//! 1. If an artwork of the visible view is under the pointer, select it.
//! 2. With a selection, hit-test scale handle, rotate handle, then the
//!    artwork bounds; the first hit starts a transform session.
//! 3. If nothing was hit at all, clear the selection.

use super::state::{TransformMode, TransformSession};
use super::{HandleKind, PointerButton, PointerEvent};
use crate::editor::Editor;
use crate::geometry::Vec2;
use crate::profile_scope;
use tracing::debug;

impl Editor {
    /// Handle a button press. Returns true if the editor changed.
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) -> bool {
        profile_scope!("handle_pointer_down");

        match event.button {
            Some(PointerButton::Middle) => {
                self.pan_anchor = Some(event.position);
                true
            }
            Some(PointerButton::Primary) => self.handle_primary_down(event.position),
            Some(PointerButton::Secondary) | None => false,
        }
    }

    fn handle_primary_down(&mut self, screen: Vec2) -> bool {
        if self.state.is_transforming() {
            // a second press mid-gesture cannot change the selection
            return false;
        }

        let world = self.camera.screen_to_world(screen);
        let hit_art = if self.is_edit_mode() {
            self.scene.artwork_at(world)
        } else {
            None
        };

        let mut changed = false;
        if let Some(id) = hit_art {
            changed |= self.selected() != Some(id);
            self.select(id);
        }

        if self.is_edit_mode() && self.begin_transform(world) {
            return true;
        }

        if hit_art.is_none() && self.selected().is_some() {
            self.deselect();
            return true;
        }
        changed
    }

    /// Pick a gesture by hit-testing the selected artwork's handles and bounds.
    fn begin_transform(&mut self, world: Vec2) -> bool {
        let Some(art) = self.selected_artwork() else {
            return false;
        };
        let container = self.scene.container_transform(art.view);

        let handle = self.handles.as_ref().and_then(|h| h.hit_test(world));
        let mode = match handle {
            Some(HandleKind::Scale) => TransformMode::Scale,
            Some(HandleKind::Rotate) => TransformMode::Rotate,
            None if art.world_bounds(&container).contains(world) => TransformMode::Move,
            None => return false,
        };

        let session = TransformSession::new(
            mode,
            world,
            art.transform,
            art.world_center(&container),
        );
        debug!("Start {:?} on {}", mode, art.id);
        self.state.start_transform(session);
        true
    }
}
