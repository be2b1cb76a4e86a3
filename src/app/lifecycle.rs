//! Application lifecycle - initialization.

use super::state::{FrameCache, MockupApp, UiState};
use crate::assets::ShirtTemplate;
use crate::editor::Editor;
use crate::geometry::Vec2;
use crate::notifications::{Toast, ToastManager};
use crate::perf::RasterStats;
use crate::render::SceneRasterizer;
use crate::settings::Settings;
use crate::types::ShirtColor;
use gpui::*;
use gpui_component::input::{InputEvent, InputState};
use tracing::{info, warn};

impl MockupApp {
    pub fn new(settings: Settings, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let template = ShirtTemplate::load_or_generated(&settings.asset_dir);
        let (width, height) = settings.canvas_size();
        let mut editor = Editor::new(template, Vec2::new(width as f32, height as f32));

        let mut toast_manager = ToastManager::new();
        let active_swatch = match editor.set_shirt_color(&settings.shirt_color) {
            Ok(color) => color.to_hex(),
            Err(e) => {
                warn!("Startup shirt color rejected: {}", e);
                toast_manager.push(Toast::warning(e.to_string()));
                ShirtColor::WHITE.to_hex()
            }
        };
        let color_input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("#rrggbb")
                .default_value(active_swatch.clone())
        });
        cx.subscribe(&color_input, |this, _input, event: &InputEvent, cx| {
            if let InputEvent::PressEnter { .. } = event {
                this.submit_color_input(cx);
            }
        })
        .detach();

        info!("Editor ready ({}x{} canvas)", width, height);

        Self {
            editor,
            settings,
            frame: FrameCache {
                image: None,
                revision: None,
                rasterizer: SceneRasterizer::default(),
                stats: RasterStats::new(),
            },
            ui: UiState {
                toast_manager,
                active_swatch,
                color_input,
            },
        }
    }
}
