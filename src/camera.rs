//! Camera - zoom and pan over the world, and screen/world conversion.
//!
//! Screen coordinates are canvas-relative pixels (origin top-left of the
//! canvas). The camera's `center` is the world point shown in the middle of
//! the viewport.

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_FACTOR};
use crate::geometry::{Affine, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    zoom: f32,
    center: Vec2,
    viewport: Vec2,
}

impl Camera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            center: Vec2::ZERO,
            viewport: Vec2::new(viewport_width, viewport_height),
        }
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Set the zoom level, clamped to the allowed range. Returns the new zoom.
    pub fn set_zoom(&mut self, zoom: f32) -> f32 {
        let zoom = if zoom.is_finite() { zoom } else { DEFAULT_ZOOM };
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.zoom
    }

    /// Set the zoom level without clamping. Used to restore a captured zoom.
    pub(crate) fn restore_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    /// Apply a wheel delta: positive `delta_y` zooms out.
    pub fn zoom_by_wheel(&mut self, delta_y: f32) -> f32 {
        self.set_zoom(self.zoom - delta_y * WHEEL_ZOOM_FACTOR)
    }

    pub fn center_on(&mut self, world: Vec2) {
        self.center = world;
    }

    /// Scroll by a screen-space delta; dragging right moves the view left.
    pub fn pan_by_screen(&mut self, delta: Vec2) {
        self.center = self.center - delta / self.zoom;
    }

    /// Zoom 1 centered on the world origin.
    pub fn reset(&mut self) {
        self.zoom = DEFAULT_ZOOM;
        self.center = Vec2::ZERO;
    }

    /// World -> screen transform.
    pub fn view_matrix(&self) -> Affine {
        Affine::translate(self.viewport / 2.0)
            .then_apply_local(Affine::scale(self.zoom))
            .then_apply_local(Affine::translate(-self.center))
    }

    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.viewport / 2.0) / self.zoom + self.center
    }

    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.center) * self.zoom + self.viewport / 2.0
    }
}
