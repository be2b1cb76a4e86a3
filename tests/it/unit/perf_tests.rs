//! Unit tests for raster timing.

use mockboard::perf::{FRAME_BUDGET_MS, RasterSample, RasterStats, SlowScope};

fn sample(millis: f64) -> RasterSample {
    RasterSample {
        millis,
        pixels: 640_000,
    }
}

#[test]
fn test_empty_stats_are_zero() {
    let stats = RasterStats::new();
    assert_eq!(stats.rasterized(), 0);
    assert_eq!(stats.mean_ms(), 0.0);
    assert_eq!(stats.reuse_ratio(), 0.0);
    assert_eq!(stats.over_budget_percent(), 0.0);
    assert!(stats.last().is_none());
}

#[test]
fn test_time_returns_closure_output() {
    let mut stats = RasterStats::new();
    let value = stats.time(100, || 41 + 1);

    assert_eq!(value, 42);
    assert_eq!(stats.rasterized(), 1);
    let last = stats.last().unwrap();
    assert_eq!(last.pixels, 100);
    assert!(last.millis >= 0.0);
}

#[test]
fn test_mean_worst_and_over_budget() {
    let mut stats = RasterStats::new();
    stats.push(sample(10.0));
    stats.push(sample(20.0));
    stats.push(sample(FRAME_BUDGET_MS * 3.0));

    let expected_mean = (30.0 + FRAME_BUDGET_MS * 3.0) / 3.0;
    assert!((stats.mean_ms() - expected_mean).abs() < 1e-9);
    assert_eq!(stats.worst_ms(), FRAME_BUDGET_MS * 3.0);
    assert!((stats.over_budget_percent() - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_window_drops_old_samples() {
    let mut stats = RasterStats::new();
    for _ in 0..60 {
        stats.push(sample(100.0));
    }
    for _ in 0..60 {
        stats.push(sample(1.0));
    }
    assert_eq!(stats.mean_ms(), 1.0);
    assert_eq!(stats.worst_ms(), 1.0);
    assert_eq!(stats.rasterized(), 120);
}

#[test]
fn test_reuse_ratio_counts_cache_hits() {
    let mut stats = RasterStats::new();
    stats.push(sample(5.0));
    stats.note_reuse();
    stats.note_reuse();
    stats.note_reuse();

    assert!((stats.reuse_ratio() - 0.75).abs() < 1e-9);
}

#[test]
fn test_throughput() {
    let s = RasterSample {
        millis: 4.0,
        pixels: 640_000,
    };
    assert!((s.megapixels_per_sec() - 160.0).abs() < 1e-9);
    assert_eq!(sample(0.0).megapixels_per_sec(), 0.0);
}

#[test]
fn test_slow_scope_measures_elapsed() {
    let scope = SlowScope::new("test_scope", 1000.0);
    assert!(scope.elapsed_ms() >= 0.0);
}
