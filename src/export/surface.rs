//! Render surface backed by the software rasterizer.

use super::RenderSurface;
use crate::editor::Editor;
use crate::error::{ExportError, ExportResult};
use crate::render::SceneRasterizer;
use image::RgbaImage;

/// Keeps the last presented frame in memory.
pub struct SoftwareSurface {
    rasterizer: SceneRasterizer,
    frame: Option<RgbaImage>,
}

impl SoftwareSurface {
    /// Surface that renders without the selection overlay.
    pub fn new() -> Self {
        Self {
            rasterizer: SceneRasterizer::for_export(),
            frame: None,
        }
    }
}

impl Default for SoftwareSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for SoftwareSurface {
    fn present_frame(&mut self, editor: &Editor) -> ExportResult<()> {
        self.frame = Some(self.rasterizer.render(editor));
        Ok(())
    }

    fn snapshot(&mut self) -> ExportResult<RgbaImage> {
        self.frame.clone().ok_or(ExportError::NoFrame)
    }
}
