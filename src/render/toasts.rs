//! Toast stack in the bottom-left corner of the canvas.

use crate::app::MockupApp;
use crate::notifications::ToastVariant;
use gpui::*;
use gpui_component::ActiveTheme as _;

/// Clicking a toast dismisses it.
pub fn render_toasts(app: &MockupApp, cx: &mut Context<MockupApp>) -> Div {
    let reduce_motion = app.settings.reduce_motion;
    let mut stack = div()
        .absolute()
        .bottom(px(16.0))
        .left(px(16.0))
        .flex()
        .flex_col()
        .gap(px(8.0));

    for toast in app.ui.toast_manager.toasts() {
        let id = toast.id;
        let accent = match toast.variant {
            ToastVariant::Success => cx.theme().success,
            ToastVariant::Info => cx.theme().info,
            ToastVariant::Warning => cx.theme().warning,
            ToastVariant::Error => cx.theme().danger,
        };
        stack = stack.child(
            div()
                .id(ElementId::Name(format!("toast-{id}").into()))
                .flex()
                .gap(px(8.0))
                .items_center()
                .cursor_pointer()
                .max_w(px(420.0))
                .px(px(12.0))
                .py(px(8.0))
                .rounded(px(6.0))
                .bg(cx.theme().background)
                .border_1()
                .border_color(accent)
                .opacity(toast.opacity(reduce_motion))
                .text_size(px(13.0))
                .child(div().text_color(accent).child(toast.variant.icon()))
                .child(div().text_color(cx.theme().foreground).child(toast.message.clone()))
                .on_click(cx.listener(move |this, _, _, cx| this.dismiss_toast(id, cx))),
        );
    }
    stack
}
