//! Selection handles - bounds outline, corner scale handle, top rotate handle.
//!
//! Handles are derived data: `SelectionHandles::compute` is a pure function
//! of the artwork transform and the camera zoom, and the editor calls it
//! again after every change instead of nudging the previous geometry.
//! Sizes are divided by zoom so the handles keep a constant screen size.

use crate::constants::{
    BOUNDS_STROKE_WIDTH, HANDLE_SIZE, ROTATE_HANDLE_OFFSET, ROTATE_HANDLE_RADIUS_RATIO,
};
use crate::geometry::{Affine, Vec2};
use crate::types::Artwork;
use serde::Serialize;

/// Which handle a pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    Scale,
    Rotate,
}

/// Overlay geometry for the selected artwork.
///
/// Handle positions are in the overlay's local frame, which is centered on
/// the artwork and rotated with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectionHandles {
    /// Overlay origin in world space (the artwork center)
    pub origin: Vec2,
    /// Overlay rotation in radians (the artwork rotation)
    pub rotation: f32,
    /// Half of the artwork display size
    pub half_size: Vec2,
    /// Side of the scale handle square, in world units
    pub handle_size: f32,
    /// Width of the bounds outline, in world units
    pub stroke_width: f32,
    /// Scale handle center, local frame (bottom-right corner)
    pub scale_handle: Vec2,
    /// Rotate handle center, local frame (above the top edge)
    pub rotate_handle: Vec2,
    /// Rotate handle radius, in world units
    pub rotate_radius: f32,
    /// Camera zoom the geometry was computed for
    pub zoom: f32,
}

impl SelectionHandles {
    pub fn compute(art: &Artwork, container: &Affine, zoom: f32) -> Self {
        let half_size = art.display_size() / 2.0;
        let handle_size = HANDLE_SIZE / zoom;
        Self {
            origin: art.world_center(container),
            rotation: art.transform.rotation,
            half_size,
            handle_size,
            stroke_width: BOUNDS_STROKE_WIDTH / zoom,
            scale_handle: Vec2::new(half_size.x, half_size.y),
            rotate_handle: Vec2::new(0.0, -half_size.y - ROTATE_HANDLE_OFFSET / zoom),
            rotate_radius: handle_size * ROTATE_HANDLE_RADIUS_RATIO,
            zoom,
        }
    }

    /// Overlay local frame -> world space.
    pub fn world_transform(&self) -> Affine {
        Affine::translate(self.origin).then_apply_local(Affine::rotate(self.rotation))
    }

    pub fn scale_handle_world(&self) -> Vec2 {
        self.world_transform().transform_point(self.scale_handle)
    }

    pub fn rotate_handle_world(&self) -> Vec2 {
        self.world_transform().transform_point(self.rotate_handle)
    }

    /// Circular hit radius shared by both handles: the handle's world size
    /// divided once more by zoom.
    pub fn hit_radius(&self) -> f32 {
        self.handle_size / self.zoom
    }

    /// Hit-test the handles; the scale handle wins over the rotate handle.
    pub fn hit_test(&self, world: Vec2) -> Option<HandleKind> {
        let radius = self.hit_radius();
        if world.distance(self.scale_handle_world()) < radius {
            Some(HandleKind::Scale)
        } else if world.distance(self.rotate_handle_world()) < radius {
            Some(HandleKind::Rotate)
        } else {
            None
        }
    }

    /// Corners of the bounds outline in world space, clockwise from top-left.
    pub fn outline_world(&self) -> [Vec2; 4] {
        let m = self.world_transform();
        let h = self.half_size;
        [
            Vec2::new(-h.x, -h.y),
            Vec2::new(h.x, -h.y),
            Vec2::new(h.x, h.y),
            Vec2::new(-h.x, h.y),
        ]
        .map(|corner| m.transform_point(corner))
    }

    /// Corners of the scale handle square in world space.
    pub fn scale_handle_quad_world(&self) -> [Vec2; 4] {
        let m = self.world_transform();
        let c = self.scale_handle;
        let h = self.handle_size / 2.0;
        [
            Vec2::new(c.x - h, c.y - h),
            Vec2::new(c.x + h, c.y - h),
            Vec2::new(c.x + h, c.y + h),
            Vec2::new(c.x - h, c.y + h),
        ]
        .map(|corner| m.transform_point(corner))
    }
}
