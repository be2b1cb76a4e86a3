//! View and mode switching, camera reset.

use super::Editor;
use crate::types::{EditMode, View};
use tracing::info;

impl Editor {
    /// Show `view`, clear the selection and reset zoom and pan.
    pub fn switch_view(&mut self, view: View) {
        self.scene.set_visible_view(view);
        self.deselect();
        self.reset_view();
        info!("Switched to {} view", view);
    }

    /// Enter edit or preview mode. Leaving edit mode clears the selection.
    pub fn set_mode(&mut self, mode: EditMode) {
        self.mode = mode;
        if mode == EditMode::Preview {
            self.deselect();
        }
        self.mark_dirty();
        info!("Mode set to {:?}", mode);
    }

    /// Zoom 1, centered on the world origin.
    pub fn reset_view(&mut self) {
        self.pan_anchor = None;
        self.camera.reset();
        self.refresh_handles();
    }

    /// Set the camera zoom (clamped) and rescale the handles.
    pub fn set_zoom(&mut self, zoom: f32) -> f32 {
        let zoom = self.camera.set_zoom(zoom);
        self.refresh_handles();
        zoom
    }
}
