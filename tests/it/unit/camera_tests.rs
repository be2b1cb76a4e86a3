//! Unit tests for the camera.

use mockboard::camera::Camera;
use mockboard::constants::{MAX_ZOOM, MIN_ZOOM};
use mockboard::geometry::Vec2;

#[test]
fn test_origin_is_at_viewport_center() {
    let camera = Camera::new(800.0, 600.0);
    assert_eq!(camera.world_to_screen(Vec2::ZERO), Vec2::new(400.0, 300.0));
    assert_eq!(camera.screen_to_world(Vec2::new(400.0, 300.0)), Vec2::ZERO);
}

#[test]
fn test_zoom_scales_around_center() {
    let mut camera = Camera::new(800.0, 800.0);
    camera.set_zoom(2.0);
    assert_eq!(camera.world_to_screen(Vec2::new(10.0, -10.0)), Vec2::new(420.0, 380.0));
    assert_eq!(camera.screen_to_world(Vec2::new(420.0, 380.0)), Vec2::new(10.0, -10.0));
}

#[test]
fn test_view_matrix_matches_world_to_screen() {
    let mut camera = Camera::new(640.0, 480.0);
    camera.set_zoom(1.5);
    camera.center_on(Vec2::new(25.0, -40.0));

    let p = Vec2::new(-13.0, 7.5);
    let expected = camera.world_to_screen(p);
    let actual = camera.view_matrix().transform_point(p);
    assert!((expected.x - actual.x).abs() < 1e-3);
    assert!((expected.y - actual.y).abs() < 1e-3);
}

#[test]
fn test_set_zoom_clamps() {
    let mut camera = Camera::new(800.0, 800.0);
    assert_eq!(camera.set_zoom(10.0), MAX_ZOOM);
    assert_eq!(camera.set_zoom(0.01), MIN_ZOOM);
    assert_eq!(camera.set_zoom(f32::NAN), 1.0);
}

#[test]
fn test_wheel_down_zooms_out() {
    let mut camera = Camera::new(800.0, 800.0);
    let zoom = camera.zoom_by_wheel(250.0);
    assert!((zoom - 0.75).abs() < 1e-6);
}

#[test]
fn test_pan_moves_world_with_pointer() {
    let mut camera = Camera::new(800.0, 800.0);
    camera.set_zoom(2.0);
    let grabbed = camera.screen_to_world(Vec2::new(100.0, 100.0));

    camera.pan_by_screen(Vec2::new(40.0, -20.0));

    // the grabbed world point follows the pointer
    assert_eq!(camera.world_to_screen(grabbed), Vec2::new(140.0, 80.0));
}

#[test]
fn test_reset() {
    let mut camera = Camera::new(800.0, 800.0);
    camera.set_zoom(2.7);
    camera.center_on(Vec2::new(5.0, 5.0));
    camera.reset();
    assert_eq!(camera.zoom(), 1.0);
    assert_eq!(camera.center(), Vec2::ZERO);
}
