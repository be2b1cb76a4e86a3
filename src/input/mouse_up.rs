//! Pointer up handling - end gestures and panning.

use super::{PointerButton, PointerEvent};
use crate::editor::Editor;
use tracing::debug;

impl Editor {
    /// Handle a button release. Any gesture ends regardless of the button.
    /// Returns true if the editor changed.
    pub fn handle_pointer_up(&mut self, event: &PointerEvent) -> bool {
        let mut changed = false;

        if event.button == Some(PointerButton::Middle) && self.pan_anchor.take().is_some() {
            changed = true;
        }

        if let Some(mode) = self.state.mode() {
            self.state.end_transform();
            debug!("End {:?}", mode);
            changed = true;
        }
        changed
    }
}
