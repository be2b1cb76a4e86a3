//! Shirt template and artwork image loading.
//!
//! A template holds, per view, the torso and sleeve silhouettes (used both
//! as tintable shirt parts and as artwork clip masks) and an outline overlay.
//! All images of one view share the same size and are centered on the
//! view's origin.
//!
//! When the template images are missing a procedurally drawn shirt is used
//! instead, so the editor always starts.

use crate::constants::GENERATED_TEMPLATE_SIZE;
use crate::error::{AssetError, AssetResult};
use crate::geometry::Vec2;
use crate::types::{Slot, View};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Images for one side of the shirt.
#[derive(Clone, Debug)]
pub struct ViewTemplate {
    pub torso: Arc<RgbaImage>,
    pub sleeve: Arc<RgbaImage>,
    pub outline: Arc<RgbaImage>,
}

impl ViewTemplate {
    pub fn part(&self, slot: Slot) -> &Arc<RgbaImage> {
        match slot {
            Slot::Torso => &self.torso,
            Slot::Sleeve => &self.sleeve,
        }
    }

    /// Shared size of the view's images.
    pub fn size(&self) -> (u32, u32) {
        self.torso.dimensions()
    }
}

/// Front and back shirt images.
#[derive(Clone, Debug)]
pub struct ShirtTemplate {
    views: [ViewTemplate; 2],
}

impl ShirtTemplate {
    pub fn new(front: ViewTemplate, back: ViewTemplate) -> Self {
        Self {
            views: [front, back],
        }
    }

    pub fn view(&self, view: View) -> &ViewTemplate {
        &self.views[view.index()]
    }

    /// Relative path of a template image inside the asset directory.
    pub fn asset_path(view: View, name: &str) -> PathBuf {
        let folder = view.label();
        PathBuf::from(folder).join(format!("shirt-{view}-{name}.png"))
    }

    /// Load `Front/shirt-front-torso.png` and siblings from `dir`.
    pub fn load_from_dir(dir: &Path) -> AssetResult<Self> {
        let load_view = |view: View| -> AssetResult<ViewTemplate> {
            let torso_path = dir.join(Self::asset_path(view, "torso"));
            let torso = load_rgba(&torso_path)?;
            let expected = torso.dimensions();
            let load_sized = |name: &str| -> AssetResult<RgbaImage> {
                let path = dir.join(Self::asset_path(view, name));
                let image = load_rgba(&path)?;
                if image.dimensions() != expected {
                    return Err(AssetError::TemplateSizeMismatch {
                        path,
                        expected,
                        actual: image.dimensions(),
                    });
                }
                Ok(image)
            };
            Ok(ViewTemplate {
                sleeve: Arc::new(load_sized("sleeve")?),
                outline: Arc::new(load_sized("outline")?),
                torso: Arc::new(torso),
            })
        };
        Ok(Self::new(load_view(View::Front)?, load_view(View::Back)?))
    }

    /// Load from `dir`, falling back to the generated template on any error.
    pub fn load_or_generated(dir: &Path) -> Self {
        match Self::load_from_dir(dir) {
            Ok(template) => {
                info!("Loaded shirt template from {}", dir.display());
                template
            }
            Err(e) => {
                warn!("Using generated shirt template: {}", e);
                Self::generated(GENERATED_TEMPLATE_SIZE)
            }
        }
    }

    /// Procedurally drawn shirt: a torso block, two sleeves and an outline.
    pub fn generated(size: u32) -> Self {
        let view = generate_view(size);
        Self::new(view.clone(), view)
    }
}

/// Decode an artwork file, surfacing unreadable or non-image files as errors.
pub fn decode_artwork(path: &Path) -> AssetResult<RgbaImage> {
    let image = load_rgba(path)?;
    info!(
        "Decoded artwork {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

fn load_rgba(path: &Path) -> AssetResult<RgbaImage> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = image::load_from_memory(&bytes)
        .map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    if image.width() == 0 || image.height() == 0 {
        return Err(AssetError::EmptyImage {
            path: path.to_path_buf(),
        });
    }
    Ok(image)
}

// ============================================================================
// Generated template
// ============================================================================

const FABRIC: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);
const OUTLINE: Rgba<u8> = Rgba([0x30, 0x30, 0x30, 0xff]);

fn generate_view(size: u32) -> ViewTemplate {
    let s = size as f32;
    let in_torso = |x: f32, y: f32| {
        let (left, right) = (0.30 * s, 0.70 * s);
        let (top, bottom) = (0.18 * s, 0.90 * s);
        // neckline scooped out of the top edge
        let neck = Vec2::new(x - 0.5 * s, y - top).length() < 0.09 * s;
        x >= left && x <= right && y >= top && y <= bottom && !neck
    };
    let in_sleeve = |x: f32, y: f32| {
        // sleeves slope outwards from the shoulders
        let t = (y - 0.18 * s) / (0.22 * s);
        if !(0.0..=1.0).contains(&t) {
            return false;
        }
        let outer = 0.30 * s - (0.12 + 0.06 * t) * s;
        let inner = 0.30 * s;
        let left = x >= outer && x < inner;
        let mirrored = s - x;
        let right = mirrored >= outer && mirrored < inner;
        left || right
    };

    let torso = RgbaImage::from_fn(size, size, |x, y| {
        if in_torso(x as f32 + 0.5, y as f32 + 0.5) {
            FABRIC
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    let sleeve = RgbaImage::from_fn(size, size, |x, y| {
        if in_sleeve(x as f32 + 0.5, y as f32 + 0.5) {
            FABRIC
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    let filled = |x: i64, y: i64| {
        if x < 0 || y < 0 || x >= size as i64 || y >= size as i64 {
            return false;
        }
        let (x, y) = (x as u32, y as u32);
        torso.get_pixel(x, y)[3] > 0 || sleeve.get_pixel(x, y)[3] > 0
    };
    let outline = RgbaImage::from_fn(size, size, |x, y| {
        let (x, y) = (x as i64, y as i64);
        let edge = filled(x, y)
            && [(-1, 0), (1, 0), (0, -1), (0, 1)]
                .iter()
                .any(|(dx, dy)| !filled(x + dx, y + dy));
        if edge { OUTLINE } else { Rgba([0, 0, 0, 0]) }
    });

    ViewTemplate {
        torso: Arc::new(torso),
        sleeve: Arc::new(sleeve),
        outline: Arc::new(outline),
    }
}
