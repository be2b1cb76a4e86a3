//! Mockboard - a shirt mockup editor.
//!
//! Artwork images are placed on the torso or sleeve of a front/back shirt
//! template, moved, scaled and rotated with on-canvas handles, tinted with
//! a shirt color and exported as a two-page PDF.
//!
//! The editing core (`editor`, `input`, `scene`, `camera`) is independent
//! of the windowing toolkit; `app` and `render` wrap it in a gpui view.

pub mod app;
pub mod assets;
pub mod camera;
pub mod constants;
pub mod editor;
pub mod error;
pub mod export;
pub mod geometry;
pub mod input;
pub mod notifications;
pub mod perf;
pub mod render;
pub mod scene;
pub mod settings;
pub mod types;
