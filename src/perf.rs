//! Rasterization timing.
//!
//! The canvas is composited on the CPU once per editor revision. `RasterStats`
//! records how long each composite took and how often the cached frame was
//! reused instead. `profile_scope!` times pointer handlers and the rasterizer
//! when built with `--features profiling` and compiles to nothing otherwise.

use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Budget for one composite at 60 Hz, in milliseconds.
pub const FRAME_BUDGET_MS: f64 = 16.67;

const WINDOW: usize = 60;

/// Composites slower than this many budgets are logged individually.
const SLOW_FACTOR: f64 = 2.0;

#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        $crate::profile_scope!($name, 1.0);
    };
    ($name:expr, $limit_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _scope = $crate::perf::SlowScope::new($name, $limit_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $limit_ms);
    };
}

pub use profile_scope;

/// One composite: wall time and pixels written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterSample {
    pub millis: f64,
    pub pixels: u64,
}

impl RasterSample {
    /// Throughput in megapixels per second, 0 for an instant frame.
    pub fn megapixels_per_sec(&self) -> f64 {
        if self.millis <= 0.0 {
            return 0.0;
        }
        self.pixels as f64 / 1_000.0 / self.millis
    }
}

#[derive(Debug, Default)]
pub struct RasterStats {
    recent: VecDeque<RasterSample>,
    rasterized: u64,
    reused: u64,
    over_budget: u64,
}

impl RasterStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `raster`, record how long it took and return its output.
    pub fn time<T>(&mut self, pixels: u64, raster: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = raster();
        self.push(RasterSample {
            millis: duration_ms(start.elapsed()),
            pixels,
        });
        out
    }

    pub fn push(&mut self, sample: RasterSample) {
        if self.recent.len() == WINDOW {
            self.recent.pop_front();
        }
        self.recent.push_back(sample);
        self.rasterized += 1;

        if sample.millis > FRAME_BUDGET_MS * SLOW_FACTOR {
            self.over_budget += 1;
            warn!(
                millis = format!("{:.2}", sample.millis),
                pixels = sample.pixels,
                "Slow canvas composite"
            );
        }
    }

    /// A render that reused the cached frame.
    pub fn note_reuse(&mut self) {
        self.reused += 1;
    }

    pub fn rasterized(&self) -> u64 {
        self.rasterized
    }

    pub fn last(&self) -> Option<RasterSample> {
        self.recent.back().copied()
    }

    /// Mean composite time over the recent window.
    pub fn mean_ms(&self) -> f64 {
        if self.recent.is_empty() {
            return 0.0;
        }
        self.recent.iter().map(|s| s.millis).sum::<f64>() / self.recent.len() as f64
    }

    pub fn worst_ms(&self) -> f64 {
        self.recent.iter().map(|s| s.millis).fold(0.0, f64::max)
    }

    /// Fraction of renders served from the cache, in `[0, 1]`.
    pub fn reuse_ratio(&self) -> f64 {
        let total = self.rasterized + self.reused;
        if total == 0 {
            return 0.0;
        }
        self.reused as f64 / total as f64
    }

    /// Percentage of composites that blew the slow threshold.
    pub fn over_budget_percent(&self) -> f64 {
        if self.rasterized == 0 {
            return 0.0;
        }
        self.over_budget as f64 * 100.0 / self.rasterized as f64
    }

    /// Debug-log the window when the mean is over budget.
    pub fn report_if_over_budget(&self) {
        let mean = self.mean_ms();
        if mean <= FRAME_BUDGET_MS {
            return;
        }
        debug!(
            mean_ms = format!("{:.2}", mean),
            worst_ms = format!("{:.2}", self.worst_ms()),
            over_budget_pct = format!("{:.1}", self.over_budget_percent()),
            reuse = format!("{:.2}", self.reuse_ratio()),
            "Canvas compositing over budget"
        );
    }
}

/// Guard that warns when the enclosing scope outlives `limit_ms`.
pub struct SlowScope {
    label: &'static str,
    started: Instant,
    limit_ms: f64,
}

impl SlowScope {
    pub fn new(label: &'static str, limit_ms: f64) -> Self {
        Self {
            label,
            started: Instant::now(),
            limit_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        duration_ms(self.started.elapsed())
    }
}

impl Drop for SlowScope {
    fn drop(&mut self) {
        let took = self.elapsed_ms();
        if took > self.limit_ms {
            warn!(scope = self.label, took_ms = format!("{:.2}", took), "Slow scope");
        }
    }
}

fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
