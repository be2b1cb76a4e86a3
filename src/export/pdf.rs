//! A4 PDF writer.
//!
//! Each page carries the view title at the top-left margin and the snapshot
//! below it, scaled to a fixed square. Page coordinates are laid out in
//! millimetres from the top-left corner and flipped into PDF space, whose
//! origin is bottom-left.
//!
//! The document is rendered to memory and written through a temporary file
//! in the target directory, so a failed export never leaves a truncated PDF
//! behind.

use super::{DocumentWriter, ExportPage, PdfiumLoader};
use crate::constants::{
    PAGE_HEIGHT_MM, PAGE_IMAGE_SIZE_MM, PAGE_IMAGE_Y_MM, PAGE_MARGIN_MM, PAGE_TITLE_FONT_SIZE,
    PAGE_TITLE_Y_MM, PAGE_WIDTH_MM,
};
use crate::error::{ExportError, ExportResult};
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct PdfiumWriter {
    loader: PdfiumLoader,
}

impl PdfiumWriter {
    pub fn new(loader: PdfiumLoader) -> Self {
        Self { loader }
    }

    fn render_document(&self, pages: &[ExportPage]) -> ExportResult<Vec<u8>> {
        let pdfium = self.loader.load()?;
        let mut document = pdfium.create_new_pdf().map_err(pdf_error)?;
        let font = document.fonts_mut().helvetica();

        for page in pages {
            let mut pdf_page = document
                .pages_mut()
                .create_page_at_end(page_size())
                .map_err(pdf_error)?;
            let objects = pdf_page.objects_mut();

            objects
                .create_text_object(
                    PdfPoints::from_mm(PAGE_MARGIN_MM),
                    flip_y(PAGE_TITLE_Y_MM),
                    &page.title,
                    font,
                    PdfPoints::new(PAGE_TITLE_FONT_SIZE),
                )
                .map_err(pdf_error)?;

            let image = DynamicImage::ImageRgba8(page.image.clone());
            objects
                .create_image_object(
                    PdfPoints::from_mm(PAGE_MARGIN_MM),
                    flip_y(PAGE_IMAGE_Y_MM + PAGE_IMAGE_SIZE_MM),
                    &image,
                    Some(PdfPoints::from_mm(PAGE_IMAGE_SIZE_MM)),
                    Some(PdfPoints::from_mm(PAGE_IMAGE_SIZE_MM)),
                )
                .map_err(pdf_error)?;
        }

        document.save_to_bytes().map_err(pdf_error)
    }
}

impl DocumentWriter for PdfiumWriter {
    fn write(&self, pages: &[ExportPage], path: &Path) -> ExportResult<()> {
        let bytes = self.render_document(pages)?;
        write_atomically(path, &bytes)?;
        info!("Wrote {} pages ({} bytes) to {}", pages.len(), bytes.len(), path.display());
        Ok(())
    }
}

/// A4 portrait, from the layout constants.
fn page_size() -> PdfPagePaperSize {
    PdfPagePaperSize::Custom(
        PdfPoints::from_mm(PAGE_WIDTH_MM),
        PdfPoints::from_mm(PAGE_HEIGHT_MM),
    )
}

/// Top-left millimetres to PDF bottom-left points.
fn flip_y(y_mm: f32) -> PdfPoints {
    PdfPoints::from_mm(PAGE_HEIGHT_MM - y_mm)
}

fn pdf_error(e: PdfiumError) -> ExportError {
    ExportError::Pdf(format!("{e:?}"))
}

/// Write `bytes` to a sibling temp file and move it over `path`.
pub(crate) fn write_atomically(path: &Path, bytes: &[u8]) -> ExportResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.flush()?;
    file.persist(path).map_err(|e| ExportError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}
