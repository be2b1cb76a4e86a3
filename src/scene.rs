//! Scene model - per-view containers, shirt parts and artwork slots.
//!
//! Each view is a container positioned at the world origin. Only the
//! container of the visible view is drawn and hit-tested; artworks on the
//! hidden view persist untouched.

use crate::assets::{ShirtTemplate, ViewTemplate};
use crate::geometry::{Affine, Vec2};
use crate::types::{ArtTransform, Artwork, ArtworkId, ShirtColor, Slot, View};
use image::RgbaImage;
use std::sync::Arc;
use tracing::debug;

/// Scene state: template, tint, visible container and the artwork slots.
pub struct SceneModel {
    template: ShirtTemplate,
    tint: ShirtColor,
    visible: View,
    /// `slots[view][slot]`, at most one artwork each
    slots: [[Option<Artwork>; 2]; 2],
    /// Draw order within a view; later placements sit on top
    z_order: Vec<ArtworkId>,
    next_id: u64,
}

impl SceneModel {
    pub fn new(template: ShirtTemplate) -> Self {
        Self {
            template,
            tint: ShirtColor::WHITE,
            visible: View::Front,
            slots: Default::default(),
            z_order: Vec::new(),
            next_id: 1,
        }
    }

    pub fn template(&self, view: View) -> &ViewTemplate {
        self.template.view(view)
    }

    /// Mask source for artwork in `(view, slot)`: the shirt part silhouette.
    pub fn clip_mask(&self, view: View, slot: Slot) -> &Arc<RgbaImage> {
        self.template.view(view).part(slot)
    }

    pub fn tint(&self) -> ShirtColor {
        self.tint
    }

    pub fn set_tint(&mut self, tint: ShirtColor) {
        self.tint = tint;
    }

    pub fn visible_view(&self) -> View {
        self.visible
    }

    /// Show one container and hide the other.
    pub fn set_visible_view(&mut self, view: View) {
        self.visible = view;
    }

    /// World transform of a view container.
    pub fn container_transform(&self, _view: View) -> Affine {
        Affine::translate(Vec2::ZERO)
    }

    /// Place `image` in `(view, slot)` at the container origin.
    ///
    /// Returns the new id and the previous occupant, which the caller must
    /// treat as destroyed.
    pub fn place_artwork(
        &mut self,
        view: View,
        slot: Slot,
        image: Arc<RgbaImage>,
    ) -> (ArtworkId, Option<Artwork>) {
        let id = ArtworkId(self.next_id);
        self.next_id += 1;
        let artwork = Artwork {
            id,
            view,
            slot,
            key: format!("art_{view}_{slot}_{}", id.0),
            image,
            transform: ArtTransform::default(),
        };
        let previous = self.slots[view.index()][slot.index()].replace(artwork);
        if let Some(ref old) = previous {
            self.z_order.retain(|z| *z != old.id);
            debug!("Replaced {} in {view}/{slot}", old.id);
        }
        self.z_order.push(id);
        (id, previous)
    }

    /// Clear the slot holding `id`, returning the removed artwork.
    pub fn remove_artwork(&mut self, id: ArtworkId) -> Option<Artwork> {
        let slot = self
            .slots
            .iter_mut()
            .flat_map(|row| row.iter_mut())
            .find(|slot| slot.as_ref().is_some_and(|art| art.id == id))?;
        let removed = slot.take();
        self.z_order.retain(|z| *z != id);
        removed
    }

    pub fn artwork(&self, id: ArtworkId) -> Option<&Artwork> {
        self.artworks().find(|art| art.id == id)
    }

    pub fn artwork_mut(&mut self, id: ArtworkId) -> Option<&mut Artwork> {
        self.slots
            .iter_mut()
            .flat_map(|row| row.iter_mut())
            .filter_map(Option::as_mut)
            .find(|art| art.id == id)
    }

    /// Occupant of `(view, slot)`, if any.
    pub fn slot(&self, view: View, slot: Slot) -> Option<&Artwork> {
        self.slots[view.index()][slot.index()].as_ref()
    }

    /// All artworks across both views.
    pub fn artworks(&self) -> impl Iterator<Item = &Artwork> {
        self.slots.iter().flat_map(|row| row.iter()).flatten()
    }

    /// Artworks of one view in draw order (bottom first).
    pub fn artworks_in_draw_order(&self, view: View) -> Vec<&Artwork> {
        self.z_order
            .iter()
            .filter_map(|id| self.artwork(*id))
            .filter(|art| art.view == view)
            .collect()
    }

    /// Topmost artwork of the visible view whose image covers `world`.
    pub fn artwork_at(&self, world: Vec2) -> Option<ArtworkId> {
        let view = self.visible;
        let container = self.container_transform(view);
        self.artworks_in_draw_order(view)
            .into_iter()
            .rev()
            .find(|art| art.hit_test(&container, world))
            .map(|art| art.id)
    }
}
