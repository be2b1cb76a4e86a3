//! Multi-page mockup export.
//!
//! The export sequence captures one snapshot per view and hands the pages
//! to a `DocumentWriter`:
//!
//! - `surface` - `SoftwareSurface`, a `RenderSurface` backed by the rasterizer
//! - `pdf` - `PdfiumWriter`, the A4 PDF `DocumentWriter`
//! - `pdfium_loader` - Locating and binding the PDFium library
//!
//! Both seams are traits so the sequence can run against any frame source
//! and any document format.

mod pdf;
mod pdfium_loader;
mod surface;

pub use pdf::PdfiumWriter;
pub use pdfium_loader::PdfiumLoader;
pub use surface::SoftwareSurface;

use crate::editor::Editor;
use crate::error::ExportResult;
use crate::geometry::Vec2;
use crate::types::View;
use image::RgbaImage;
use std::path::Path;
use tracing::{info, warn};

/// Something that can render the editor and read the pixels back.
pub trait RenderSurface {
    /// Render the editor's current state. Completes before returning, so a
    /// following `snapshot` sees this frame.
    fn present_frame(&mut self, editor: &Editor) -> ExportResult<()>;

    /// Pixels of the most recently presented frame.
    fn snapshot(&mut self) -> ExportResult<RgbaImage>;
}

/// One captured view.
#[derive(Debug, Clone)]
pub struct ExportPage {
    pub title: String,
    pub image: RgbaImage,
}

/// Writes captured pages as a document at `path`.
pub trait DocumentWriter {
    fn write(&self, pages: &[ExportPage], path: &Path) -> ExportResult<()>;
}

/// View and camera to put back after a capture.
struct SavedView {
    view: View,
    zoom: f32,
    center: Vec2,
}

/// Capture front and back at zoom 1, centered and without selection, then
/// write them to `path` in that order.
///
/// On success the editor is left on the front view. On failure the view
/// and camera in place before the export are restored.
pub fn export_mockup(
    editor: &mut Editor,
    surface: &mut dyn RenderSurface,
    writer: &dyn DocumentWriter,
    path: &Path,
) -> ExportResult<()> {
    let saved = SavedView {
        view: editor.current_view(),
        zoom: editor.camera.zoom(),
        center: editor.camera.center(),
    };

    let result = capture_pages(editor, surface).and_then(|pages| writer.write(&pages, path));
    match result {
        Ok(()) => {
            editor.switch_view(View::Front);
            info!("Exported {} views to {}", View::ALL.len(), path.display());
            Ok(())
        }
        Err(e) => {
            warn!("Export failed, restoring {} view: {}", saved.view, e);
            restore(editor, &saved);
            Err(e)
        }
    }
}

fn capture_pages(
    editor: &mut Editor,
    surface: &mut dyn RenderSurface,
) -> ExportResult<Vec<ExportPage>> {
    let mut pages = Vec::with_capacity(View::ALL.len());
    for view in View::ALL {
        // clears the selection and resets zoom and pan
        editor.switch_view(view);
        let image = surface
            .present_frame(editor)
            .and_then(|()| surface.snapshot())?;
        pages.push(ExportPage {
            title: view.page_title().to_string(),
            image,
        });
    }
    Ok(pages)
}

fn restore(editor: &mut Editor, saved: &SavedView) {
    editor.scene.set_visible_view(saved.view);
    editor.deselect();
    editor.pan_anchor = None;
    editor.camera.restore_zoom(saved.zoom);
    editor.camera.center_on(saved.center);
    editor.mark_dirty();
}
