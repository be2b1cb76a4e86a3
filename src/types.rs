//! Core types for the mockup editor.
//!
//! Views, placement slots, edit modes, shirt colors and artwork placements.

use crate::error::{AssetError, AssetResult};
use crate::geometry::{Affine, Rect, Vec2};
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Side of the shirt being edited or displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Front,
    Back,
}

impl View {
    /// All views, in export order.
    pub const ALL: [View; 2] = [View::Front, View::Back];

    pub fn label(self) -> &'static str {
        match self {
            View::Front => "Front",
            View::Back => "Back",
        }
    }

    /// Title printed on the exported page for this view.
    pub fn page_title(self) -> &'static str {
        match self {
            View::Front => "Front View",
            View::Back => "Back View",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            View::Front => 0,
            View::Back => 1,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            View::Front => "front",
            View::Back => "back",
        })
    }
}

/// Placement region on a shirt view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Torso,
    Sleeve,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::Torso, Slot::Sleeve];

    pub fn label(self) -> &'static str {
        match self {
            Slot::Torso => "Torso",
            Slot::Sleeve => "Sleeve",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Slot::Torso => 0,
            Slot::Sleeve => 1,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Slot::Torso => "torso",
            Slot::Sleeve => "sleeve",
        })
    }
}

/// Whether artwork can be selected and transformed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    #[default]
    Edit,
    Preview,
}

/// Shirt tint color, applied multiplicatively to the shirt parts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShirtColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for ShirtColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl ShirtColor {
    pub const WHITE: ShirtColor = ShirtColor {
        r: 0xff,
        g: 0xff,
        b: 0xff,
    };

    /// Parse a `#rrggbb` (or `rrggbb`) hex string.
    pub fn from_hex(hex: &str) -> AssetResult<Self> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AssetError::InvalidColor(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| AssetError::InvalidColor(hex.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Multiply an RGB triple by this tint.
    #[inline]
    pub fn apply(self, rgb: [u8; 3]) -> [u8; 3] {
        let mul = |c: u8, t: u8| ((c as u16 * t as u16 + 127) / 255) as u8;
        [mul(rgb[0], self.r), mul(rgb[1], self.g), mul(rgb[2], self.b)]
    }
}

/// Stable identifier of a placed artwork.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtworkId(pub u64);

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "art#{}", self.0)
    }
}

/// Position, uniform scale and rotation of an artwork within its view container.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArtTransform {
    pub position: Vec2,
    pub scale: f32,
    pub rotation: f32,
}

impl Default for ArtTransform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

/// An image placed on one (view, slot) of the shirt.
///
/// The image is centered on `transform.position`. Clipping to the shirt
/// part silhouette happens at render time.
#[derive(Clone, Debug)]
pub struct Artwork {
    pub id: ArtworkId,
    pub view: View,
    pub slot: Slot,
    /// Human-readable source key, e.g. `art_front_torso_3`
    pub key: String,
    pub image: Arc<RgbaImage>,
    pub transform: ArtTransform,
}

impl Artwork {
    /// Unscaled image size.
    pub fn source_size(&self) -> Vec2 {
        Vec2::new(self.image.width() as f32, self.image.height() as f32)
    }

    /// Image size after scaling.
    pub fn display_size(&self) -> Vec2 {
        self.source_size() * self.transform.scale
    }

    /// Transform from image-centered local coordinates to container space.
    pub fn local_matrix(&self) -> Affine {
        Affine::from_trs(
            self.transform.position,
            self.transform.rotation,
            self.transform.scale,
        )
    }

    /// Transform from image-centered local coordinates to world space.
    pub fn world_matrix(&self, container: &Affine) -> Affine {
        container.then_apply_local(self.local_matrix())
    }

    /// Position of the artwork center in world space.
    pub fn world_center(&self, container: &Affine) -> Vec2 {
        container.transform_point(self.transform.position)
    }

    /// Axis-aligned world bounds of the rotated, scaled image.
    pub fn world_bounds(&self, container: &Affine) -> Rect {
        let matrix = self.world_matrix(container);
        let half = self.source_size() / 2.0;
        Rect::bounding(
            [
                Vec2::new(-half.x, -half.y),
                Vec2::new(half.x, -half.y),
                Vec2::new(half.x, half.y),
                Vec2::new(-half.x, half.y),
            ]
            .map(|corner| matrix.transform_point(corner)),
        )
    }

    /// Whether a world point lies on the image itself (in its rotated frame).
    pub fn hit_test(&self, container: &Affine, world: Vec2) -> bool {
        let Some(inverse) = self.world_matrix(container).inverse() else {
            return false;
        };
        let local = inverse.transform_point(world);
        let half = self.source_size() / 2.0;
        local.x.abs() <= half.x && local.y.abs() <= half.y
    }
}
