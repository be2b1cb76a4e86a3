//! Rendering - the software scene rasterizer and the gpui view tree.
//!
//! - `raster` - CPU compositing of the shirt, artwork and selection overlay
//! - `canvas` - The canvas element showing the rasterized frame
//! - `panel` - Controls sidebar
//! - `toasts` - Notification stack

mod canvas;
mod panel;
mod raster;
mod toasts;

pub use raster::SceneRasterizer;

use crate::app::MockupApp;
use crate::constants::HEADER_HEIGHT;
use gpui::*;
use gpui_component::ActiveTheme as _;

fn render_header(app: &MockupApp, cx: &App) -> Div {
    let view = app.editor.current_view();
    div()
        .h(px(HEADER_HEIGHT))
        .w_full()
        .flex_none()
        .flex()
        .items_center()
        .justify_between()
        .px(px(14.0))
        .bg(cx.theme().title_bar)
        .border_b_1()
        .border_color(cx.theme().border)
        .child(
            div()
                .text_size(px(14.0))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(cx.theme().foreground)
                .child("Mockboard"),
        )
        .child(
            div()
                .text_size(px(12.0))
                .text_color(cx.theme().muted_foreground)
                .child(format!("{} view", view.label())),
        )
}

impl Render for MockupApp {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.ui.toast_manager.prune_expired() || self.ui.toast_manager.count() > 0 {
            // keep redrawing until every toast has expired
            window.request_animation_frame();
        }

        let header = render_header(self, cx);
        let canvas = canvas::render_canvas(self, window, cx);
        let panel = panel::render_panel(self, cx);
        let toasts = toasts::render_toasts(self, cx);

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(cx.theme().background)
            .child(header)
            .child(
                div()
                    .relative()
                    .flex_1()
                    .flex()
                    .child(canvas)
                    .child(panel)
                    .child(toasts),
            )
    }
}
