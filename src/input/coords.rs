//! Coordinate conversion between gpui window positions and canvas pixels.
//!
//! The canvas sits below the header bar at the left edge of the window.

use crate::constants::HEADER_HEIGHT;
use crate::geometry::Vec2;
use gpui::{Pixels, Point, point, px};

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a window position to canvas pixels
    #[inline]
    pub fn window_to_canvas(pos: Point<Pixels>) -> Vec2 {
        Vec2::new(f32::from(pos.x), f32::from(pos.y) - HEADER_HEIGHT)
    }

    /// Convert canvas pixels to a window position
    #[inline]
    pub fn canvas_to_window(pos: Vec2) -> Point<Pixels> {
        point(px(pos.x), px(pos.y + HEADER_HEIGHT))
    }
}
