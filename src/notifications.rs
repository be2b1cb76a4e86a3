//! Toast notifications.
//!
//! Upload failures, export results and similar one-off messages are shown
//! as toasts stacked in the corner of the window. Toasts expire on their
//! own; the view prunes them on every render.

use std::time::{Duration, Instant};

/// At most this many toasts are kept; older ones are dropped first.
const MAX_TOASTS: usize = 4;

/// Share of a toast's lifetime spent fading out.
const FADE_FRACTION: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastVariant {
    pub fn default_duration(self) -> Duration {
        match self {
            ToastVariant::Success | ToastVariant::Info => Duration::from_secs(3),
            ToastVariant::Warning => Duration::from_secs(4),
            ToastVariant::Error => Duration::from_secs(5),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastVariant::Success => "✓",
            ToastVariant::Info => "ℹ",
            ToastVariant::Warning => "⚠",
            ToastVariant::Error => "✗",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub variant: ToastVariant,
    pub duration: Duration,
    created: Instant,
}

impl Toast {
    fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            id: 0,
            message: message.into(),
            variant,
            duration: variant.default_duration(),
            created: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Error)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created.elapsed() >= self.duration
    }

    /// Fraction of the lifetime left, 1.0 when fresh.
    pub fn remaining_percent(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = self.created.elapsed().as_secs_f32();
        (1.0 - elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Opacity for rendering: fades out over the last part of the lifetime.
    pub fn opacity(&self, reduce_motion: bool) -> f32 {
        if reduce_motion {
            return 1.0;
        }
        (self.remaining_percent() / FADE_FRACTION).min(1.0)
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast, assigning it a fresh id.
    pub fn push(&mut self, mut toast: Toast) -> u64 {
        self.next_id += 1;
        toast.id = self.next_id;
        self.toasts.push(toast);
        if self.toasts.len() > MAX_TOASTS {
            self.toasts.remove(0);
        }
        self.next_id
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drop expired toasts. Returns true if any were removed.
    pub fn prune_expired(&mut self) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired());
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn count(&self) -> usize {
        self.toasts.len()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}
