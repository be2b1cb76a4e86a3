//! Unit tests for views, colors and artwork geometry.

use crate::helpers::{RED, assert_close, solid_image};
use mockboard::error::AssetError;
use mockboard::geometry::{Affine, Vec2};
use mockboard::types::{ArtTransform, Artwork, ArtworkId, ShirtColor, Slot, View};
use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

fn artwork(width: u32, height: u32, transform: ArtTransform) -> Artwork {
    Artwork {
        id: ArtworkId(1),
        view: View::Front,
        slot: Slot::Torso,
        key: "art_front_torso_1".to_string(),
        image: Arc::new(solid_image(width, height, RED)),
        transform,
    }
}

#[test]
fn test_view_labels_and_page_titles() {
    assert_eq!(View::ALL, [View::Front, View::Back]);
    assert_eq!(View::Front.page_title(), "Front View");
    assert_eq!(View::Back.page_title(), "Back View");
    assert_eq!(View::Back.label(), "Back");
    assert_eq!(View::Front.to_string(), "front");
    assert_eq!(Slot::Sleeve.to_string(), "sleeve");
}

#[test]
fn test_shirt_color_rejects_bad_hex() {
    for bad in ["", "#fff", "#12345g", "1234567", "red"] {
        assert!(
            matches!(ShirtColor::from_hex(bad), Err(AssetError::InvalidColor(_))),
            "{bad:?} should be rejected"
        );
    }
    assert_eq!(ShirtColor::from_hex("  #9E9E9E ").unwrap().to_hex(), "#9e9e9e");
}

#[test]
fn test_shirt_color_multiplies_channels() {
    let tint = ShirtColor::from_hex("#ff8000").unwrap();
    assert_eq!(tint.apply([255, 255, 255]), [255, 128, 0]);
    assert_eq!(tint.apply([100, 100, 100]), [100, 50, 0]);
    assert_eq!(ShirtColor::WHITE.apply([12, 34, 56]), [12, 34, 56]);
}

#[test]
fn test_display_size_follows_scale() {
    let art = artwork(
        100,
        60,
        ArtTransform {
            scale: 1.5,
            ..ArtTransform::default()
        },
    );
    assert_eq!(art.source_size(), Vec2::new(100.0, 60.0));
    assert_eq!(art.display_size(), Vec2::new(150.0, 90.0));
}

#[test]
fn test_world_bounds_of_rotated_artwork() {
    let art = artwork(
        100,
        60,
        ArtTransform {
            position: Vec2::new(10.0, 20.0),
            scale: 1.0,
            rotation: FRAC_PI_2,
        },
    );
    let bounds = art.world_bounds(&Affine::IDENTITY);

    // a quarter turn swaps width and height
    assert_close(bounds.min.x, -20.0);
    assert_close(bounds.max.x, 40.0);
    assert_close(bounds.min.y, -30.0);
    assert_close(bounds.max.y, 70.0);
}

#[test]
fn test_hit_test_uses_rotated_frame() {
    let art = artwork(
        100,
        20,
        ArtTransform {
            rotation: FRAC_PI_2,
            ..ArtTransform::default()
        },
    );
    let container = Affine::IDENTITY;

    // the long axis now points along y
    assert!(art.hit_test(&container, Vec2::new(0.0, 45.0)));
    assert!(art.hit_test(&container, Vec2::new(5.0, -45.0)));
    assert!(!art.hit_test(&container, Vec2::new(45.0, 0.0)));
}

#[test]
fn test_hit_test_fails_for_degenerate_scale() {
    let art = artwork(
        10,
        10,
        ArtTransform {
            scale: 0.0,
            ..ArtTransform::default()
        },
    );
    assert!(!art.hit_test(&Affine::IDENTITY, Vec2::ZERO));
}
