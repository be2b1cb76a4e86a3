//! Selection - at most one selected artwork, its handles, and deletion.

use super::Editor;
use crate::input::SelectionHandles;
use crate::types::ArtworkId;
use tracing::{debug, info};

impl Editor {
    /// Select `id`, deselecting any previous selection first.
    ///
    /// Selecting the already-selected artwork is a no-op. Returns false if
    /// `id` is not in the scene.
    pub fn select(&mut self, id: ArtworkId) -> bool {
        if self.selected() == Some(id) {
            return true;
        }
        if self.scene.artwork(id).is_none() {
            return false;
        }
        self.deselect();
        self.state.select(id);
        self.refresh_handles();
        debug!("Selected {}", id);
        true
    }

    /// Clear the selection and discard the handles.
    pub fn deselect(&mut self) {
        if let Some(id) = self.selected() {
            debug!("Deselected {}", id);
        }
        self.state.reset();
        if self.handles.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Remove the selected artwork from its slot. No-op without a selection.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selected() else {
            return false;
        };
        let removed = self.scene.remove_artwork(id);
        self.deselect();
        self.mark_dirty();
        if let Some(art) = removed {
            info!("Deleted {} from {}/{}", art.id, art.view, art.slot);
        }
        true
    }

    /// Recompute handle geometry from the selected artwork and current zoom.
    pub(crate) fn refresh_handles(&mut self) {
        self.handles = self.selected_artwork().map(|art| {
            let container = self.scene.container_transform(art.view);
            SelectionHandles::compute(art, &container, self.camera.zoom())
        });
        self.mark_dirty();
    }
}
