//! View switching, edit/preview mode, camera and tint.

use crate::helpers::{RED, TestEditorBuilder, assert_close, editor_with_torso_art, press, solid_image};
use mockboard::constants::{HANDLE_SIZE, MAX_ZOOM, MIN_ZOOM};
use mockboard::error::AssetError;
use mockboard::geometry::Vec2;
use mockboard::input::PointerEvent;
use mockboard::types::{EditMode, ShirtColor, Slot, View};

#[test]
fn test_switch_view_clears_selection_and_resets_camera() {
    let (mut editor, id) = editor_with_torso_art();
    editor.set_zoom(2.0);

    editor.switch_view(View::Back);

    assert_eq!(editor.current_view(), View::Back);
    assert_eq!(editor.selected(), None);
    assert_eq!(editor.camera().zoom(), 1.0);
    assert_eq!(editor.camera().center(), Vec2::ZERO);
    // artwork on the hidden view persists
    assert!(editor.scene().artwork(id).is_some());
}

#[test]
fn test_hidden_view_artwork_is_not_interactive() {
    let (mut editor, _) = TestEditorBuilder::new()
        .with_artwork_on(View::Back, Slot::Torso, solid_image(100, 100, RED))
        .on_view(View::Front)
        .build();

    assert!(!press(&mut editor, Vec2::ZERO));
    assert_eq!(editor.selected(), None);
}

#[test]
fn test_artwork_lands_on_current_view() {
    let (editor, ids) = TestEditorBuilder::new()
        .with_artwork_on(View::Back, Slot::Sleeve, solid_image(10, 10, RED))
        .build();

    let art = editor.scene().artwork(ids[0]).unwrap();
    assert_eq!(art.view, View::Back);
    assert_eq!(art.slot, Slot::Sleeve);
    assert!(art.key.starts_with("art_back_sleeve_"));
}

#[test]
fn test_preview_mode_deselects() {
    let (mut editor, _) = editor_with_torso_art();

    editor.set_mode(EditMode::Preview);
    assert!(!editor.is_edit_mode());
    assert_eq!(editor.selected(), None);
    assert!(editor.handles().is_none());
}

#[test]
fn test_wheel_zoom_rescales_handles() {
    let (mut editor, _) = editor_with_torso_art();

    assert!(editor.handle_wheel(100.0));
    assert_close(editor.camera().zoom(), 0.9);
    assert_close(editor.handles().unwrap().handle_size, HANDLE_SIZE / 0.9);

    assert!(editor.handle_wheel(-600.0));
    assert_close(editor.camera().zoom(), 1.5);
}

#[test]
fn test_wheel_zoom_is_clamped() {
    let (mut editor, _) = TestEditorBuilder::new().build();

    editor.handle_wheel(-10_000.0);
    assert_eq!(editor.camera().zoom(), MAX_ZOOM);
    // already at the limit
    assert!(!editor.handle_wheel(-10.0));

    editor.handle_wheel(10_000.0);
    assert_eq!(editor.camera().zoom(), MIN_ZOOM);
}

#[test]
fn test_middle_drag_pans_by_screen_delta_over_zoom() {
    let (mut editor, _) = TestEditorBuilder::new().with_zoom(2.0).build();

    assert!(editor.handle_pointer_down(&PointerEvent::middle(400.0, 400.0)));
    assert!(editor.is_panning());
    assert!(editor.handle_pointer_move(&PointerEvent::middle(500.0, 300.0)));
    assert_eq!(editor.camera().center(), Vec2::new(-50.0, 50.0));

    assert!(editor.handle_pointer_up(&PointerEvent::middle(500.0, 300.0)));
    assert!(!editor.is_panning());
}

#[test]
fn test_middle_drag_does_not_touch_selection() {
    let (mut editor, id) = editor_with_torso_art();

    editor.handle_pointer_down(&PointerEvent::middle(400.0, 400.0));
    editor.handle_pointer_move(&PointerEvent::middle(420.0, 400.0));

    assert_eq!(editor.selected(), Some(id));
    assert_eq!(editor.scene().artwork(id).unwrap().transform.position, Vec2::ZERO);
}

#[test]
fn test_reset_view() {
    let (mut editor, _) = TestEditorBuilder::new().with_zoom(2.5).build();
    editor.handle_pointer_down(&PointerEvent::middle(0.0, 0.0));
    editor.handle_pointer_move(&PointerEvent::middle(100.0, 0.0));

    editor.reset_view();
    assert_eq!(editor.camera().zoom(), 1.0);
    assert_eq!(editor.camera().center(), Vec2::ZERO);
    assert!(!editor.is_panning());
}

#[test]
fn test_shirt_color_tints_scene() {
    let (mut editor, _) = TestEditorBuilder::new().build();

    let color = editor.set_shirt_color("#1565C0").unwrap();
    assert_eq!(color.to_hex(), "#1565c0");
    assert_eq!(editor.scene().tint(), color);
}

#[test]
fn test_invalid_shirt_color_keeps_previous_tint() {
    let (mut editor, _) = TestEditorBuilder::new().build();
    editor.set_shirt_color("#c62828").unwrap();

    let err = editor.set_shirt_color("not-a-color").unwrap_err();
    assert!(matches!(err, AssetError::InvalidColor(_)));
    assert_eq!(editor.scene().tint(), ShirtColor::from_hex("#c62828").unwrap());
}

#[test]
fn test_revision_advances_on_visual_changes() {
    let (mut editor, _) = editor_with_torso_art();
    let before = editor.revision();
    editor.set_zoom(1.5);
    assert!(editor.revision() > before);
}
