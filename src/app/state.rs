//! Application state structs.

use crate::editor::Editor;
use crate::notifications::ToastManager;
use crate::perf::RasterStats;
use crate::render::SceneRasterizer;
use crate::settings::Settings;
use gpui::{Entity, RenderImage};
use gpui_component::input::InputState;
use std::sync::Arc;

/// The last rasterized canvas frame, uploaded as a gpui image.
pub struct FrameCache {
    pub image: Option<Arc<RenderImage>>,
    /// Editor revision the image was rendered from
    pub revision: Option<u64>,
    pub rasterizer: SceneRasterizer,
    pub stats: RasterStats,
}

/// UI state - toasts and panel toggles
pub struct UiState {
    pub toast_manager: ToastManager,
    /// Shirt color currently highlighted in the swatch row
    pub active_swatch: String,
    /// Free-form `#rrggbb` entry next to the swatches
    pub color_input: Entity<InputState>,
}

/// Main application view
pub struct MockupApp {
    pub editor: Editor,
    pub settings: Settings,
    pub frame: FrameCache,
    pub ui: UiState,
}
