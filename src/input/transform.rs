//! Canvas transformations - wheel zoom.

use crate::editor::Editor;

impl Editor {
    /// Zoom by a vertical wheel delta (positive zooms out).
    /// Returns true if the zoom changed.
    pub fn handle_wheel(&mut self, delta_y: f32) -> bool {
        let before = self.camera.zoom();
        let after = self.camera.zoom_by_wheel(delta_y);
        if after == before {
            return false;
        }
        self.refresh_handles();
        true
    }
}
