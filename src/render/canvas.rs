//! Canvas element - the rasterized frame plus pointer listeners.
//!
//! The frame already contains the selection overlay, so this element only
//! shows the image and forwards mouse and wheel events to the app.

use crate::app::MockupApp;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::ActiveTheme as _;

pub fn render_canvas(
    app: &mut MockupApp,
    window: &mut Window,
    cx: &mut Context<MockupApp>,
) -> Stateful<Div> {
    let frame = app.canvas_frame(window);
    let (width, height) = app.settings.canvas_size();
    let cursor = if app.editor.is_panning() {
        CursorStyle::ClosedHand
    } else if app.editor.state().is_transforming() {
        CursorStyle::Crosshair
    } else {
        CursorStyle::Arrow
    };

    div()
        .id("canvas")
        .w(px(width as f32))
        .h(px(height as f32))
        .flex_none()
        .overflow_hidden()
        .border_r_1()
        .border_color(cx.theme().border)
        .cursor(cursor)
        .when_some(frame, |d, frame| d.child(img(frame).size_full()))
        .on_mouse_down(MouseButton::Left, cx.listener(MockupApp::handle_canvas_mouse_down))
        .on_mouse_down(MouseButton::Middle, cx.listener(MockupApp::handle_canvas_mouse_down))
        .on_mouse_move(cx.listener(MockupApp::handle_canvas_mouse_move))
        .on_mouse_up(MouseButton::Left, cx.listener(MockupApp::handle_canvas_mouse_up))
        .on_mouse_up(MouseButton::Middle, cx.listener(MockupApp::handle_canvas_mouse_up))
        // Releasing outside the canvas still ends the gesture
        .on_mouse_up_out(MouseButton::Left, cx.listener(MockupApp::handle_canvas_mouse_up))
        .on_mouse_up_out(MouseButton::Middle, cx.listener(MockupApp::handle_canvas_mouse_up))
        .on_scroll_wheel(cx.listener(MockupApp::handle_canvas_scroll))
}
