//! Export sequence against in-memory surfaces and writers.

use crate::helpers::{RED, TestEditorBuilder, VIEWPORT, solid_image};
use image::{Rgba, RgbaImage};
use mockboard::constants::SELECTION_RGB;
use mockboard::editor::Editor;
use mockboard::error::{ExportError, ExportResult};
use mockboard::export::{
    DocumentWriter, ExportPage, RenderSurface, SoftwareSurface, export_mockup,
};
use mockboard::geometry::Vec2;
use mockboard::input::PointerEvent;
use mockboard::types::{Slot, View};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Keeps the pages it is asked to write.
#[derive(Default)]
struct RecordingWriter {
    written: RefCell<Vec<(PathBuf, Vec<ExportPage>)>>,
}

impl DocumentWriter for RecordingWriter {
    fn write(&self, pages: &[ExportPage], path: &Path) -> ExportResult<()> {
        self.written
            .borrow_mut()
            .push((path.to_path_buf(), pages.to_vec()));
        Ok(())
    }
}

struct FailingWriter;

impl DocumentWriter for FailingWriter {
    fn write(&self, _pages: &[ExportPage], _path: &Path) -> ExportResult<()> {
        Err(ExportError::Pdf("disk full".into()))
    }
}

/// Records the editor state seen at each presented frame.
#[derive(Default)]
struct ProbeSurface {
    inner: SoftwareSurface,
    presented: Vec<(View, f32, Vec2, bool)>,
    /// Fail the snapshot after this many successful ones
    fail_after: Option<usize>,
    snapshots: usize,
}

impl RenderSurface for ProbeSurface {
    fn present_frame(&mut self, editor: &Editor) -> ExportResult<()> {
        self.presented.push((
            editor.current_view(),
            editor.camera().zoom(),
            editor.camera().center(),
            editor.selected().is_some(),
        ));
        self.inner.present_frame(editor)
    }

    fn snapshot(&mut self) -> ExportResult<RgbaImage> {
        if self.fail_after == Some(self.snapshots) {
            return Err(ExportError::Surface("lost context".into()));
        }
        self.snapshots += 1;
        self.inner.snapshot()
    }
}

fn center_pixel(image: &RgbaImage) -> Rgba<u8> {
    *image.get_pixel(image.width() / 2, image.height() / 2)
}

#[test]
fn test_export_captures_front_then_back() {
    let (mut editor, _) = TestEditorBuilder::new()
        .with_artwork(Slot::Torso, solid_image(100, 100, RED))
        .build();
    let mut surface = ProbeSurface::default();
    let writer = RecordingWriter::default();

    export_mockup(&mut editor, &mut surface, &writer, Path::new("shirt-mockup.pdf")).unwrap();

    let written = writer.written.borrow();
    assert_eq!(written.len(), 1);
    let (path, pages) = &written[0];
    assert_eq!(path, Path::new("shirt-mockup.pdf"));
    let titles: Vec<_> = pages.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Front View", "Back View"]);
    for page in pages {
        assert_eq!(page.image.dimensions(), (VIEWPORT as u32, VIEWPORT as u32));
    }

    // artwork only on the front torso
    assert_eq!(center_pixel(&pages[0].image), RED);
    assert_eq!(center_pixel(&pages[1].image), Rgba([0xff, 0xff, 0xff, 0xff]));
}

#[test]
fn test_export_normalizes_camera_and_clears_selection_per_view() {
    let (mut editor, _) = TestEditorBuilder::new()
        .with_artwork(Slot::Torso, solid_image(100, 100, RED))
        .with_zoom(2.5)
        .build();
    editor.handle_pointer_down(&PointerEvent::middle(0.0, 0.0));
    editor.handle_pointer_move(&PointerEvent::middle(80.0, 40.0));
    editor.handle_pointer_up(&PointerEvent::middle(80.0, 40.0));

    let mut surface = ProbeSurface::default();
    export_mockup(
        &mut editor,
        &mut surface,
        &RecordingWriter::default(),
        Path::new("out.pdf"),
    )
    .unwrap();

    assert_eq!(
        surface.presented,
        vec![
            (View::Front, 1.0, Vec2::ZERO, false),
            (View::Back, 1.0, Vec2::ZERO, false),
        ]
    );
}

#[test]
fn test_export_never_draws_handles() {
    let (mut editor, _) = TestEditorBuilder::new()
        .with_artwork(Slot::Torso, solid_image(100, 100, RED))
        .build();
    let writer = RecordingWriter::default();

    export_mockup(
        &mut editor,
        &mut SoftwareSurface::new(),
        &writer,
        Path::new("out.pdf"),
    )
    .unwrap();

    let selection = Rgba([SELECTION_RGB[0], SELECTION_RGB[1], SELECTION_RGB[2], 0xff]);
    let written = writer.written.borrow();
    let front = &written[0].1[0].image;
    assert!(front.pixels().all(|p| *p != selection));
}

#[test]
fn test_successful_export_returns_to_front_view() {
    let (mut editor, _) = TestEditorBuilder::new()
        .with_artwork(Slot::Torso, solid_image(100, 100, RED))
        .on_view(View::Back)
        .with_zoom(1.8)
        .build();

    export_mockup(
        &mut editor,
        &mut SoftwareSurface::new(),
        &RecordingWriter::default(),
        Path::new("out.pdf"),
    )
    .unwrap();

    assert_eq!(editor.current_view(), View::Front);
    assert_eq!(editor.selected(), None);
    assert_eq!(editor.camera().zoom(), 1.0);
}

#[test]
fn test_snapshot_failure_restores_view_and_camera() {
    let (mut editor, _) = TestEditorBuilder::new()
        .with_artwork(Slot::Torso, solid_image(100, 100, RED))
        .on_view(View::Back)
        .with_zoom(1.5)
        .build();
    editor.handle_pointer_down(&PointerEvent::middle(0.0, 0.0));
    editor.handle_pointer_move(&PointerEvent::middle(30.0, 0.0));
    editor.handle_pointer_up(&PointerEvent::middle(30.0, 0.0));
    let center = editor.camera().center();

    // front succeeds, back fails
    let mut surface = ProbeSurface {
        fail_after: Some(1),
        ..Default::default()
    };
    let writer = RecordingWriter::default();
    let err = export_mockup(&mut editor, &mut surface, &writer, Path::new("out.pdf")).unwrap_err();

    assert!(matches!(err, ExportError::Surface(_)));
    assert!(writer.written.borrow().is_empty());
    assert_eq!(editor.current_view(), View::Back);
    assert_eq!(editor.camera().zoom(), 1.5);
    assert_eq!(editor.camera().center(), center);
}

#[test]
fn test_writer_failure_restores_view() {
    let (mut editor, _) = TestEditorBuilder::new().on_view(View::Back).build();

    let err = export_mockup(
        &mut editor,
        &mut SoftwareSurface::new(),
        &FailingWriter,
        Path::new("out.pdf"),
    )
    .unwrap_err();

    assert!(err.to_string().contains("disk full"));
    assert_eq!(editor.current_view(), View::Back);
}

#[test]
fn test_snapshot_before_present_fails() {
    let mut surface = SoftwareSurface::new();
    assert!(matches!(surface.snapshot(), Err(ExportError::NoFrame)));
}
