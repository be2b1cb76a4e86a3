//! gpui event adapters for the canvas.
//!
//! Window events are converted to canvas-space `PointerEvent`s and passed
//! to the editor; the view is only notified when the editor reports a
//! change.

use super::MockupApp;
use crate::input::coords::CoordinateConverter;
use crate::input::{PointerButton, PointerEvent};
use gpui::*;

/// Pixels per wheel line when the platform reports line deltas
const WHEEL_LINE_HEIGHT: f32 = 20.0;

fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Middle => Some(PointerButton::Middle),
        MouseButton::Right => Some(PointerButton::Secondary),
        _ => None,
    }
}

impl MockupApp {
    pub fn handle_canvas_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let pointer = PointerEvent::new(
            CoordinateConverter::window_to_canvas(event.position),
            pointer_button(event.button),
        );
        if self.editor.handle_pointer_down(&pointer) {
            cx.notify();
        }
    }

    pub fn handle_canvas_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let pointer = PointerEvent::new(
            CoordinateConverter::window_to_canvas(event.position),
            event.pressed_button.and_then(pointer_button),
        );
        if self.editor.handle_pointer_move(&pointer) {
            cx.notify();
        }
    }

    pub fn handle_canvas_mouse_up(
        &mut self,
        event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let pointer = PointerEvent::new(
            CoordinateConverter::window_to_canvas(event.position),
            pointer_button(event.button),
        );
        if self.editor.handle_pointer_up(&pointer) {
            cx.notify();
        }
    }

    pub fn handle_canvas_scroll(
        &mut self,
        event: &ScrollWheelEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let delta = event.delta.pixel_delta(px(WHEEL_LINE_HEIGHT));
        if self.editor.handle_wheel(f32::from(delta.y)) {
            cx.notify();
        }
    }
}
