//! Canvas frame upload.
//!
//! The scene is rasterized on the CPU and handed to gpui as a `RenderImage`.
//! A new frame is produced only when the editor revision changes; the
//! previous image is released from the sprite atlas when replaced.

use super::MockupApp;
use gpui::{RenderImage, Window};
use image::{Frame, RgbaImage};
use std::sync::Arc;
use tracing::warn;

impl MockupApp {
    /// Current canvas image, re-rasterized if the editor changed.
    pub fn canvas_frame(&mut self, window: &mut Window) -> Option<Arc<RenderImage>> {
        let revision = self.editor.revision();
        if self.frame.revision == Some(revision) && self.frame.image.is_some() {
            self.frame.stats.note_reuse();
            return self.frame.image.clone();
        }

        let viewport = self.editor.camera().viewport();
        let pixels = (viewport.x.max(1.0) * viewport.y.max(1.0)) as u64;
        let rasterizer = self.frame.rasterizer;
        let editor = &self.editor;
        let rgba = self.frame.stats.time(pixels, || rasterizer.render(editor));
        self.frame.stats.report_if_over_budget();
        let image = Arc::new(to_render_image(rgba));

        if let Some(old) = self.frame.image.replace(image.clone()) {
            if let Err(e) = window.drop_image(old) {
                warn!("Failed to release previous canvas frame: {}", e);
            }
        }
        self.frame.revision = Some(revision);
        Some(image)
    }
}

/// gpui expects BGRA pixel order.
fn to_render_image(mut rgba: RgbaImage) -> RenderImage {
    for pixel in rgba.pixels_mut() {
        pixel.0.swap(0, 2);
    }
    RenderImage::new(vec![Frame::new(rgba)])
}
