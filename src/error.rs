//! Error types for asset loading, settings and export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading shirt templates, decoding artwork, or
/// parsing user-supplied colors.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a decodable image
    #[error("Could not decode {path} as an image: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Decoded image has a zero dimension
    #[error("Image {path} is empty")]
    EmptyImage { path: PathBuf },

    /// Template parts of one view do not share the same dimensions
    #[error("Template part {path} is {actual:?}, expected {expected:?}")]
    TemplateSizeMismatch {
        path: PathBuf,
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("Invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}

/// Result type alias for asset operations
pub type AssetResult<T> = Result<T, AssetError>;

/// Errors raised while capturing views or writing the exported document.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Snapshot requested before the surface presented a frame
    #[error("No rendered frame available for snapshot")]
    NoFrame,

    #[error("Render surface failed: {0}")]
    Surface(String),

    #[error("PDF library unavailable: {0}")]
    LibraryUnavailable(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors raised while reading or writing the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No configuration directory on this platform")]
    NoConfigDir,
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
