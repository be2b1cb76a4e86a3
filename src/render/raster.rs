//! CPU rasterizer for the mockup canvas.
//!
//! Every output pixel is mapped back through the camera into world space and
//! the layers are composited bottom to top:
//!
//! 1. background
//! 2. tinted torso and sleeve parts of the visible view
//! 3. artworks in draw order, each masked by its slot's part silhouette
//! 4. the shirt outline
//! 5. the selection overlay, if requested
//!
//! The same frame feeds the on-screen canvas and the export snapshots.

use crate::assets::ViewTemplate;
use crate::camera::Camera;
use crate::constants::{BACKGROUND_RGB, ROTATE_HANDLE_RGB, SELECTION_RGB};
use crate::editor::Editor;
use crate::geometry::{Affine, Vec2};
use crate::input::SelectionHandles;
use crate::profile_scope;
use crate::scene::SceneModel;
use crate::types::{Artwork, ShirtColor};
use image::{Rgba, RgbaImage};

/// Renders editor frames at the camera's viewport size.
#[derive(Debug, Clone, Copy)]
pub struct SceneRasterizer {
    pub background: [u8; 3],
    /// Draw the selection outline and handles
    pub draw_handles: bool,
}

impl Default for SceneRasterizer {
    fn default() -> Self {
        Self {
            background: BACKGROUND_RGB,
            draw_handles: true,
        }
    }
}

/// Per-frame artwork data with the inverse transform resolved once.
struct ArtLayer<'a> {
    art: &'a Artwork,
    mask: &'a RgbaImage,
    world_to_local: Affine,
    half: Vec2,
}

impl SceneRasterizer {
    /// Rasterizer for export snapshots: never draws handles.
    pub fn for_export() -> Self {
        Self {
            draw_handles: false,
            ..Self::default()
        }
    }

    /// Render the editor's visible view through its camera.
    pub fn render(&self, editor: &Editor) -> RgbaImage {
        let handles = if self.draw_handles {
            editor.handles()
        } else {
            None
        };
        self.render_scene(editor.scene(), editor.camera(), handles)
    }

    pub fn render_scene(
        &self,
        scene: &SceneModel,
        camera: &Camera,
        handles: Option<&SelectionHandles>,
    ) -> RgbaImage {
        profile_scope!("render_scene", 8.0);

        let viewport = camera.viewport();
        let width = viewport.x.max(1.0).round() as u32;
        let height = viewport.y.max(1.0).round() as u32;
        let view = scene.visible_view();
        let template = scene.template(view);
        let (tw, th) = template.size();
        let template_origin = Vec2::new(tw as f32 / 2.0, th as f32 / 2.0);
        let tint = scene.tint();
        let container = scene.container_transform(view);

        let layers: Vec<ArtLayer<'_>> = scene
            .artworks_in_draw_order(view)
            .into_iter()
            .filter_map(|art| {
                Some(ArtLayer {
                    world_to_local: art.world_matrix(&container).inverse()?,
                    mask: scene.clip_mask(view, art.slot),
                    half: art.source_size() / 2.0,
                    art,
                })
            })
            .collect();

        let background = Rgba([
            self.background[0],
            self.background[1],
            self.background[2],
            255,
        ]);
        let mut frame = RgbaImage::from_pixel(width, height, background);

        for (x, y, pixel) in frame.enumerate_pixels_mut() {
            let screen = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let world = camera.screen_to_world(screen);
            let local = world + template_origin;
            if local.x < 0.0 || local.y < 0.0 {
                continue;
            }
            let (tx, ty) = (local.x as u32, local.y as u32);
            if tx >= tw || ty >= th {
                continue;
            }
            composite_template_pixel(pixel, template, tint, &layers, world, tx, ty);
        }

        if let Some(handles) = handles {
            draw_handles(&mut frame, camera, handles);
        }
        frame
    }
}

fn composite_template_pixel(
    pixel: &mut Rgba<u8>,
    template: &ViewTemplate,
    tint: ShirtColor,
    layers: &[ArtLayer<'_>],
    world: Vec2,
    tx: u32,
    ty: u32,
) {
    for part in [&template.torso, &template.sleeve] {
        let p = part.get_pixel(tx, ty);
        let [r, g, b] = tint.apply([p[0], p[1], p[2]]);
        blend(pixel, [r, g, b], p[3] as f32 / 255.0);
    }

    for layer in layers {
        let mask = layer.mask.get_pixel(tx, ty)[3];
        if mask == 0 {
            continue;
        }
        let local = layer.world_to_local.transform_point(world) + layer.half;
        if local.x < 0.0 || local.y < 0.0 {
            continue;
        }
        let (ax, ay) = (local.x as u32, local.y as u32);
        let image = &layer.art.image;
        if ax >= image.width() || ay >= image.height() {
            continue;
        }
        let src = image.get_pixel(ax, ay);
        let alpha = (src[3] as f32 / 255.0) * (mask as f32 / 255.0);
        blend(pixel, [src[0], src[1], src[2]], alpha);
    }

    let o = template.outline.get_pixel(tx, ty);
    blend(pixel, [o[0], o[1], o[2]], o[3] as f32 / 255.0);
}

/// Source-over blend onto an opaque destination.
fn blend(dst: &mut Rgba<u8>, src: [u8; 3], alpha: f32) {
    if alpha <= 0.0 {
        return;
    }
    let alpha = alpha.min(1.0);
    for i in 0..3 {
        let d = dst[i] as f32;
        dst[i] = (d + (src[i] as f32 - d) * alpha).round() as u8;
    }
}

/// Draw the bounds outline, scale square and rotate circle.
fn draw_handles(frame: &mut RgbaImage, camera: &Camera, handles: &SelectionHandles) {
    let view = camera.view_matrix();
    let outline = handles.outline_world().map(|p| view.transform_point(p));
    let square = handles
        .scale_handle_quad_world()
        .map(|p| view.transform_point(p));
    let rotate_center = view.transform_point(handles.rotate_handle_world());
    let zoom = camera.zoom();
    let half_stroke = handles.stroke_width * zoom / 2.0;
    let rotate_radius = handles.rotate_radius * zoom;

    // Only touch pixels near the overlay
    let points = outline.iter().chain(square.iter()).copied().chain([
        rotate_center - Vec2::new(rotate_radius, rotate_radius),
        rotate_center + Vec2::new(rotate_radius, rotate_radius),
    ]);
    let (mut min, mut max) = (Vec2::new(f32::MAX, f32::MAX), Vec2::new(f32::MIN, f32::MIN));
    for p in points {
        min = Vec2::new(min.x.min(p.x), min.y.min(p.y));
        max = Vec2::new(max.x.max(p.x), max.y.max(p.y));
    }
    let pad = half_stroke + 1.0;
    let x0 = (min.x - pad).floor().max(0.0) as u32;
    let y0 = (min.y - pad).floor().max(0.0) as u32;
    let x1 = ((max.x + pad).ceil().max(0.0) as u32).min(frame.width());
    let y1 = ((max.y + pad).ceil().max(0.0) as u32).min(frame.height());

    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let pixel = frame.get_pixel_mut(x, y);
            let on_outline = (0..4)
                .any(|i| distance_to_segment(p, outline[i], outline[(i + 1) % 4]) <= half_stroke);
            if on_outline || inside_quad(p, &square) {
                blend(pixel, SELECTION_RGB, 1.0);
            }
            if p.distance(rotate_center) <= rotate_radius {
                blend(pixel, ROTATE_HANDLE_RGB, 1.0);
            }
        }
    }
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let ap = p - a;
    let t = ((ap.x * ab.x + ap.y * ab.y) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Point-in-convex-quad via consistent edge cross products.
fn inside_quad(p: Vec2, quad: &[Vec2; 4]) -> bool {
    let mut sign = 0.0f32;
    for i in 0..4 {
        let a = quad[i];
        let b = quad[(i + 1) % 4];
        let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
        if cross != 0.0 {
            if sign != 0.0 && cross.signum() != sign {
                return false;
            }
            sign = cross.signum();
        }
    }
    true
}
