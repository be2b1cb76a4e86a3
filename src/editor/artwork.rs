//! Artwork placement and shirt tint.

use super::Editor;
use crate::assets::decode_artwork;
use crate::error::AssetResult;
use crate::types::{ArtworkId, ShirtColor, Slot};
use image::RgbaImage;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

impl Editor {
    /// Place `image` in `slot` of the current view and select it.
    ///
    /// An artwork already in that slot is destroyed first.
    pub fn add_artwork(&mut self, slot: Slot, image: RgbaImage) -> ArtworkId {
        let view = self.current_view();
        let replaces_selection = self
            .scene
            .slot(view, slot)
            .is_some_and(|old| Some(old.id) == self.selected());
        if replaces_selection {
            self.deselect();
        }

        let (id, previous) = self.scene.place_artwork(view, slot, Arc::new(image));
        if let Some(old) = previous {
            info!("Destroyed {} replaced in {}/{}", old.id, view, slot);
        }
        self.mark_dirty();

        if self.is_edit_mode() {
            self.select(id);
        }
        id
    }

    /// Decode the file at `path` and place it in `slot` of the current view.
    ///
    /// Decode failures leave the scene untouched and are returned to the
    /// caller for display.
    pub fn upload_artwork(&mut self, slot: Slot, path: &Path) -> AssetResult<ArtworkId> {
        let image = decode_artwork(path)?;
        let id = self.add_artwork(slot, image);
        info!("Uploaded {} as {} in {}/{}", path.display(), id, self.current_view(), slot);
        Ok(id)
    }

    /// Tint the torso and sleeve parts of both views.
    pub fn set_shirt_color(&mut self, hex: &str) -> AssetResult<ShirtColor> {
        let color = ShirtColor::from_hex(hex)?;
        self.scene.set_tint(color);
        self.mark_dirty();
        Ok(color)
    }
}
