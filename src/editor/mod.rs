//! Editor module - the single owner of scene, camera and selection state.
//!
//! The `Editor` is passed by reference to whatever drives it (the gpui view,
//! the export sequence, tests); there is no ambient global state.
//!
//! This module is organized into several submodules:
//! - `selection` - Select, deselect, delete and handle recomputation
//! - `view_mode` - View switching, edit/preview mode and camera reset
//! - `artwork` - Artwork upload/placement and shirt tint
//!
//! Pointer handling lives in `crate::input` as further `impl Editor` blocks.

mod artwork;
mod selection;
mod view_mode;

use crate::assets::ShirtTemplate;
use crate::camera::Camera;
use crate::geometry::Vec2;
use crate::input::{EditorState, SelectionHandles};
use crate::scene::SceneModel;
use crate::types::{Artwork, ArtworkId, EditMode, View};

pub struct Editor {
    pub(crate) scene: SceneModel,
    pub(crate) camera: Camera,
    /// Selection / gesture state machine
    pub(crate) state: EditorState,
    /// Overlay for the selected artwork; `Some` exactly while selected
    pub(crate) handles: Option<SelectionHandles>,
    /// Last screen position of a middle-button pan
    pub(crate) pan_anchor: Option<Vec2>,
    pub(crate) mode: EditMode,
    /// Bumped on every visual change so renderers can cache frames
    revision: u64,
}

impl Editor {
    /// Create an editor showing the front view in edit mode.
    pub fn new(template: ShirtTemplate, viewport: Vec2) -> Self {
        Self {
            scene: SceneModel::new(template),
            camera: Camera::new(viewport.x, viewport.y),
            state: EditorState::Idle,
            handles: None,
            pan_anchor: None,
            mode: EditMode::Edit,
            revision: 0,
        }
    }

    pub fn scene(&self) -> &SceneModel {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn handles(&self) -> Option<&SelectionHandles> {
        self.handles.as_ref()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_edit_mode(&self) -> bool {
        self.mode == EditMode::Edit
    }

    pub fn current_view(&self) -> View {
        self.scene.visible_view()
    }

    pub fn selected(&self) -> Option<ArtworkId> {
        self.state.selected()
    }

    pub fn selected_artwork(&self) -> Option<&Artwork> {
        self.selected().and_then(|id| self.scene.artwork(id))
    }

    /// Whether the delete affordance should be enabled.
    pub fn can_delete(&self) -> bool {
        self.selected().is_some()
    }

    pub fn is_panning(&self) -> bool {
        self.pan_anchor.is_some()
    }

    /// Monotonic counter of visual changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
