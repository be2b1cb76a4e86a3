//! Panel actions - upload, delete, view/mode switching, tint and export.

use super::MockupApp;
use crate::editor::Editor;
use crate::export::{PdfiumWriter, SoftwareSurface, export_mockup};
use crate::notifications::{Toast, ToastManager};
use crate::types::{EditMode, ShirtColor, Slot, View};
use gpui::*;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Tint the shirt with `hex`; a rejected value becomes an error toast.
pub fn apply_shirt_color(
    editor: &mut Editor,
    toasts: &mut ToastManager,
    hex: &str,
) -> Option<ShirtColor> {
    match editor.set_shirt_color(hex) {
        Ok(color) => Some(color),
        Err(e) => {
            warn!("Rejected shirt color {:?}: {}", hex, e);
            toasts.push(Toast::error(e.to_string()));
            None
        }
    }
}

impl MockupApp {
    pub fn show_toast(&mut self, toast: Toast) {
        self.ui.toast_manager.push(toast);
    }

    /// Ask for an image file and place it in `slot` of the current view.
    pub fn upload_artwork(&mut self, slot: Slot, cx: &mut Context<Self>) {
        let Some(path) = rfd::FileDialog::new()
            .set_title(format!("Upload {} artwork", slot.label()))
            .add_filter("Images", &["png", "jpg", "jpeg"])
            .pick_file()
        else {
            return;
        };

        if let Err(e) = self.editor.upload_artwork(slot, &path) {
            warn!("Upload failed: {}", e);
            self.show_toast(Toast::error(e.to_string()));
        }
        cx.notify();
    }

    pub fn delete_selected(&mut self, cx: &mut Context<Self>) {
        if self.editor.delete_selected() {
            cx.notify();
        }
    }

    pub fn switch_view(&mut self, view: View, cx: &mut Context<Self>) {
        self.editor.switch_view(view);
        cx.notify();
    }

    pub fn set_mode(&mut self, mode: EditMode, cx: &mut Context<Self>) {
        self.editor.set_mode(mode);
        cx.notify();
    }

    pub fn reset_view(&mut self, cx: &mut Context<Self>) {
        self.editor.reset_view();
        cx.notify();
    }

    pub fn set_shirt_color(&mut self, hex: &str, cx: &mut Context<Self>) {
        if let Some(color) = apply_shirt_color(&mut self.editor, &mut self.ui.toast_manager, hex) {
            self.ui.active_swatch = color.to_hex();
            self.settings.shirt_color = color.to_hex();
            if let Err(e) = self.settings.save() {
                warn!("Could not persist shirt color: {}", e);
            }
        }
        cx.notify();
    }

    /// Apply whatever is typed in the hex field.
    pub fn submit_color_input(&mut self, cx: &mut Context<Self>) {
        let hex = self.ui.color_input.read(cx).value().to_string();
        self.set_shirt_color(&hex, cx);
    }

    pub fn dismiss_toast(&mut self, id: u64, cx: &mut Context<Self>) {
        self.ui.toast_manager.remove(id);
        cx.notify();
    }

    /// Ask for a destination and export both views as a PDF.
    pub fn export_pdf(&mut self, cx: &mut Context<Self>) {
        let Some(path) = self.pick_export_path() else {
            return;
        };

        let mut surface = SoftwareSurface::new();
        let writer = PdfiumWriter::default();
        match export_mockup(&mut self.editor, &mut surface, &writer, &path) {
            Ok(()) => {
                self.show_toast(Toast::success(format!("Exported {}", path.display())));
                if self.settings.open_after_export {
                    if let Err(e) = open::that(&path) {
                        warn!("Could not open {}: {}", path.display(), e);
                    }
                }
            }
            Err(e) => {
                error!("Export failed: {}", e);
                self.show_toast(Toast::error(format!("Export failed: {e}")));
            }
        }
        cx.notify();
    }

    fn pick_export_path(&self) -> Option<PathBuf> {
        let path = rfd::FileDialog::new()
            .set_title("Export mockup")
            .set_file_name(&self.settings.export_file_name)
            .add_filter("PDF", &["pdf"])
            .save_file()?;
        info!("Export destination {}", path.display());
        Some(path)
    }
}
