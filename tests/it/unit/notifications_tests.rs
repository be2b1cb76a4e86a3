//! Toasts surfacing upload and export results.

use mockboard::notifications::{Toast, ToastManager, ToastVariant};
use std::time::Duration;

#[test]
fn test_toast_creation() {
    let toast = Toast::error("Could not decode logo.png");
    assert_eq!(toast.message, "Could not decode logo.png");
    assert_eq!(toast.variant, ToastVariant::Error);
    assert_eq!(toast.duration, ToastVariant::Error.default_duration());
}

#[test]
fn test_toast_manager_assigns_ids() {
    let mut manager = ToastManager::new();
    assert_eq!(manager.count(), 0);

    let first = manager.push(Toast::success("Exported"));
    let second = manager.push(Toast::error("Export failed"));
    assert_ne!(first, second);
    assert_eq!(manager.count(), 2);

    manager.remove(first);
    assert_eq!(manager.count(), 1);
    assert_eq!(manager.toasts()[0].id, second);

    manager.clear();
    assert_eq!(manager.count(), 0);
}

#[test]
fn test_toast_manager_drops_oldest_when_full() {
    let mut manager = ToastManager::new();
    for i in 0..6 {
        manager.push(Toast::info(format!("toast {i}")));
    }
    assert_eq!(manager.count(), 4);
    assert_eq!(manager.toasts()[0].message, "toast 2");
}

#[test]
fn test_fresh_toast_is_opaque_and_alive() {
    let toast = Toast::success("Exported shirt-mockup.pdf").with_duration(Duration::from_secs(10));
    assert!(!toast.is_expired());
    assert!(toast.remaining_percent() > 0.99);
    assert_eq!(toast.opacity(false), 1.0);
    assert_eq!(toast.opacity(true), 1.0);
}

#[test]
fn test_zero_duration_toast_is_pruned() {
    let mut manager = ToastManager::new();
    manager.push(Toast::warning("gone").with_duration(Duration::ZERO));
    manager.push(Toast::info("stays").with_duration(Duration::from_secs(60)));

    assert!(manager.prune_expired());
    assert_eq!(manager.count(), 1);
    assert_eq!(manager.toasts()[0].message, "stays");
    assert!(!manager.prune_expired());
}

#[test]
fn test_errors_linger_longest() {
    let table = [
        (ToastVariant::Success, 3, "✓"),
        (ToastVariant::Info, 3, "ℹ"),
        (ToastVariant::Warning, 4, "⚠"),
        (ToastVariant::Error, 5, "✗"),
    ];
    for (variant, secs, icon) in table {
        assert_eq!(variant.default_duration(), Duration::from_secs(secs), "{variant:?}");
        assert_eq!(variant.icon(), icon);
    }
}

#[test]
fn test_reduce_motion_keeps_expiring_toast_opaque() {
    let toast = Toast::info("fading").with_duration(Duration::ZERO);
    assert_eq!(toast.opacity(false), 0.0);
    assert_eq!(toast.opacity(true), 1.0);
}
