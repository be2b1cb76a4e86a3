//! Controls panel - right-side sidebar with view, mode, color, artwork and
//! export controls.

use crate::app::MockupApp;
use crate::constants::{PANEL_WIDTH, SHIRT_SWATCHES};
use crate::input::TransformMode;
use crate::types::{EditMode, ShirtColor, Slot, View};
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::input::Input;

/// Render a panel button; disabled buttons are dimmed and not clickable.
fn panel_button(id: &str, label: &str, active: bool, enabled: bool, cx: &App) -> Stateful<Div> {
    let bg = if active {
        cx.theme().primary
    } else {
        cx.theme().secondary
    };
    let fg = if active {
        cx.theme().primary_foreground
    } else {
        cx.theme().foreground
    };
    let hover_bg = cx.theme().muted;

    div()
        .id(ElementId::Name(id.to_string().into()))
        .flex_1()
        .h(px(30.0))
        .px(px(10.0))
        .rounded(px(6.0))
        .bg(bg)
        .flex()
        .items_center()
        .justify_center()
        .text_size(px(13.0))
        .text_color(fg)
        .when(enabled, |d| {
            d.cursor_pointer()
                .hover(|s| s.bg(if active { bg } else { hover_bg }))
        })
        .when(!enabled, |d| d.opacity(0.4))
        .child(label.to_string())
}

fn section_title(title: &'static str, cx: &App) -> Div {
    div()
        .text_size(px(11.0))
        .font_weight(FontWeight::SEMIBOLD)
        .text_color(cx.theme().muted_foreground)
        .child(title)
}

fn swatch_color(hex: &str) -> Rgba {
    let c = ShirtColor::from_hex(hex).unwrap_or(ShirtColor::WHITE);
    rgb(((c.r as u32) << 16) | ((c.g as u32) << 8) | c.b as u32)
}

/// One-line hint describing what the pointer will do.
fn transform_hint(app: &MockupApp) -> &'static str {
    if !app.editor.is_edit_mode() {
        return "Preview mode: switch to Edit to change artwork";
    }
    match app.editor.state().mode() {
        Some(TransformMode::Move) => "Moving artwork",
        Some(TransformMode::Scale) => "Scaling artwork",
        Some(TransformMode::Rotate) => "Rotating artwork",
        None if app.editor.selected().is_some() => {
            "Drag to move, blue corner to scale, red dot to rotate"
        }
        None => "Click an artwork to select it",
    }
}

pub fn render_panel(app: &MockupApp, cx: &mut Context<MockupApp>) -> Stateful<Div> {
    let view = app.editor.current_view();
    let mode = app.editor.mode();
    let editing = app.editor.is_edit_mode();
    let can_delete = app.editor.can_delete();
    let border = cx.theme().border;

    let mut view_row = div().flex().gap(px(6.0));
    for v in View::ALL {
        view_row = view_row.child(
            panel_button(&format!("view-{v}"), v.label(), v == view, true, cx)
                .on_click(cx.listener(move |this, _, _, cx| this.switch_view(v, cx))),
        );
    }

    let mode_row = div()
        .flex()
        .gap(px(6.0))
        .child(
            panel_button("mode-edit", "Edit", mode == EditMode::Edit, true, cx)
                .on_click(cx.listener(|this, _, _, cx| this.set_mode(EditMode::Edit, cx))),
        )
        .child(
            panel_button("mode-preview", "Preview", mode == EditMode::Preview, true, cx)
                .on_click(cx.listener(|this, _, _, cx| this.set_mode(EditMode::Preview, cx))),
        );

    let mut swatches = div().flex().flex_wrap().gap(px(6.0));
    for hex in SHIRT_SWATCHES.iter().copied() {
        let active = app.ui.active_swatch.eq_ignore_ascii_case(hex);
        swatches = swatches.child(
            div()
                .id(ElementId::Name(format!("swatch-{hex}").into()))
                .size(px(24.0))
                .rounded_full()
                .bg(swatch_color(hex))
                .border_2()
                .border_color(if active { cx.theme().primary } else { border })
                .cursor_pointer()
                .on_click(cx.listener(move |this, _, _, cx| this.set_shirt_color(hex, cx))),
        );
    }

    let color_entry = div()
        .flex()
        .gap(px(6.0))
        .items_center()
        .child(div().flex_1().child(Input::new(&app.ui.color_input)))
        .child(
            panel_button("apply-color", "Apply", false, true, cx)
                .flex_none()
                .on_click(cx.listener(|this, _, _, cx| this.submit_color_input(cx))),
        );

    let mut upload_row = div().flex().gap(px(6.0));
    for slot in Slot::ALL {
        upload_row = upload_row.child(
            panel_button(
                &format!("upload-{slot}"),
                &format!("Upload {}", slot.label()),
                false,
                editing,
                cx,
            )
            .when(editing, |d| {
                d.on_click(cx.listener(move |this, _, _, cx| this.upload_artwork(slot, cx)))
            }),
        );
    }

    let zoom_label = format!("Zoom {:.0}%", app.editor.camera().zoom() * 100.0);

    div()
        .id("controls-panel")
        .w(px(PANEL_WIDTH))
        .h_full()
        .flex()
        .flex_col()
        .gap(px(12.0))
        .p(px(14.0))
        .child(section_title("VIEW", cx))
        .child(view_row)
        .child(section_title("MODE", cx))
        .child(mode_row)
        .child(section_title("SHIRT COLOR", cx))
        .child(swatches)
        .child(color_entry)
        .child(section_title("ARTWORK", cx))
        .child(upload_row)
        .child(
            div().flex().gap(px(6.0)).child(
                panel_button("delete-artwork", "Delete selected", false, can_delete, cx)
                    .when(can_delete, |d| {
                        d.on_click(cx.listener(|this, _, _, cx| this.delete_selected(cx)))
                    }),
            ),
        )
        .child(
            div()
                .text_size(px(12.0))
                .text_color(cx.theme().muted_foreground)
                .child(transform_hint(app)),
        )
        .child(section_title("CANVAS", cx))
        .child(
            div()
                .flex()
                .gap(px(6.0))
                .items_center()
                .child(
                    panel_button("reset-view", "Reset view", false, true, cx)
                        .on_click(cx.listener(|this, _, _, cx| this.reset_view(cx))),
                )
                .child(
                    div()
                        .flex_1()
                        .text_size(px(12.0))
                        .text_color(cx.theme().muted_foreground)
                        .child(zoom_label),
                ),
        )
        .child(div().flex_1())
        .child(
            div().flex().child(
                panel_button("export-pdf", "Export PDF", true, true, cx)
                    .on_click(cx.listener(|this, _, _, cx| this.export_pdf(cx))),
            ),
        )
}
