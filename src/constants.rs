//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Layout Constants
// ============================================================================

/// Width of the editing canvas in pixels
pub const CANVAS_WIDTH: u32 = 800;

/// Height of the editing canvas in pixels
pub const CANVAS_HEIGHT: u32 = 800;

/// Height of the header bar in pixels
pub const HEADER_HEIGHT: f32 = 40.0;

/// Width of the controls panel (right sidebar) in pixels
pub const PANEL_WIDTH: f32 = 260.0;

/// Canvas background color (`#f0f0f0`)
pub const BACKGROUND_RGB: [u8; 3] = [0xf0, 0xf0, 0xf0];

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.3;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 3.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom change per unit of vertical wheel delta
pub const WHEEL_ZOOM_FACTOR: f32 = 0.001;

// ============================================================================
// Artwork Transform
// ============================================================================

/// Smallest uniform scale an artwork can be given
pub const MIN_ARTWORK_SCALE: f32 = 0.1;

// ============================================================================
// Selection Handles (screen pixels at zoom 1.0)
// ============================================================================

/// Visual size of the scale handle square
pub const HANDLE_SIZE: f32 = 16.0;

/// Stroke width of the selection bounds outline
pub const BOUNDS_STROKE_WIDTH: f32 = 2.0;

/// Gap between the top edge of the artwork and the rotate handle
pub const ROTATE_HANDLE_OFFSET: f32 = 20.0;

/// Rotate handle radius as a fraction of the handle size
pub const ROTATE_HANDLE_RADIUS_RATIO: f32 = 0.4;

/// Selection outline and scale handle color (`#4285f4`)
pub const SELECTION_RGB: [u8; 3] = [0x42, 0x85, 0xf4];

/// Rotate handle color (`#ea4335`)
pub const ROTATE_HANDLE_RGB: [u8; 3] = [0xea, 0x43, 0x35];

// ============================================================================
// Shirt Template
// ============================================================================

/// Directory (relative to the working directory) holding the shirt images
pub const DEFAULT_ASSET_DIR: &str = "ImageAssets";

/// Side length of the generated fallback template in pixels
pub const GENERATED_TEMPLATE_SIZE: u32 = 600;

/// Default shirt color
pub const DEFAULT_SHIRT_COLOR: &str = "#ffffff";

/// Swatches offered by the color panel
pub const SHIRT_SWATCHES: &[&str] = &[
    "#ffffff", "#1f1f1f", "#c62828", "#1565c0", "#2e7d32", "#f9a825", "#6a1b9a", "#9e9e9e",
];

// ============================================================================
// Export (millimetres on an A4 page, origin top-left)
// ============================================================================

/// Default exported file name
pub const DEFAULT_EXPORT_FILE_NAME: &str = "shirt-mockup.pdf";

/// A4 page width in millimetres
pub const PAGE_WIDTH_MM: f32 = 210.0;

/// A4 page height in millimetres
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Left margin for title and snapshot
pub const PAGE_MARGIN_MM: f32 = 10.0;

/// Baseline of the page title
pub const PAGE_TITLE_Y_MM: f32 = 10.0;

/// Top edge of the snapshot image
pub const PAGE_IMAGE_Y_MM: f32 = 20.0;

/// Width and height of the snapshot image
pub const PAGE_IMAGE_SIZE_MM: f32 = 180.0;

/// Title font size in points
pub const PAGE_TITLE_FONT_SIZE: f32 = 16.0;
