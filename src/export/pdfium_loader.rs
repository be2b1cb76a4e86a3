//! PDFium library loader with platform-specific search paths.
//!
//! Export needs the PDFium dynamic library at runtime. It is looked up next
//! to the working directory and the executable before falling back to the
//! system library.

use crate::error::{ExportError, ExportResult};
use pdfium_render::prelude::*;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct PdfiumLoader {
    /// Directories searched before the default locations
    extra_dirs: Vec<PathBuf>,
}

impl PdfiumLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also search `dir` for the library, ahead of the default locations.
    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.extra_dirs.push(dir.into());
        self
    }

    /// Bind PDFium from the first candidate that loads.
    ///
    /// Search order:
    /// 1. directories added with `with_search_dir`
    /// 2. `lib/` in the current working directory (development)
    /// 3. `lib/` next to the executable
    /// 4. `Resources/lib/` in a macOS bundle
    /// 5. the system library
    pub fn load(&self) -> ExportResult<Pdfium> {
        for path in self.candidates() {
            if !path.exists() {
                continue;
            }
            match Pdfium::bind_to_library(&path) {
                Ok(bindings) => {
                    debug!("Bound PDFium from {}", path.display());
                    return Ok(Pdfium::new(bindings));
                }
                Err(e) => debug!("Skipping {}: {:?}", path.display(), e),
            }
        }
        Pdfium::bind_to_system_library()
            .map(Pdfium::new)
            .map_err(|e| ExportError::LibraryUnavailable(format!("{e:?}")))
    }

    /// Library file candidates in search order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let library = Pdfium::pdfium_platform_library_name();
        self.search_dirs()
            .into_iter()
            .map(|dir| dir.join(&library))
            .collect()
    }

    fn search_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = self.extra_dirs.clone();

        if let Ok(cwd) = std::env::current_dir() {
            dirs.push(cwd.join("lib"));
        }

        if let Ok(exe) = std::env::current_exe() {
            if let Some(parent) = exe.parent() {
                dirs.push(parent.join("lib"));
                if let Some(grandparent) = parent.parent() {
                    dirs.push(grandparent.join("Resources/lib"));
                }
            }
        }

        dirs
    }
}
