//! Unit tests for Mockboard.

mod camera_tests;
mod notifications_tests;
mod perf_tests;
mod settings_tests;
mod types_tests;
