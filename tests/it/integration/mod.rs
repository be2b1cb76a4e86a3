//! Integration tests for Mockboard.
//!
//! These tests drive the editor through pointer events and panel actions
//! and check complete workflows end-to-end.

mod export_tests;
mod view_mode_tests;
