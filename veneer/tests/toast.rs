//! Tests for toast stacking, expiry and dismissal.

use std::time::{Duration, Instant};

use veneer::toast::{Toast, ToastLevel, ToastStack};

#[test]
fn new_toasts_stack_on_top() {
    let stack = ToastStack::new();
    stack.push(Toast::info("first"));
    stack.push(Toast::success("second"));

    let active = stack.active(Instant::now());
    assert_eq!(active.len(), 2);
    assert_eq!(active[0].1.message, "second");
    assert_eq!(active[1].1.message, "first");
}

#[test]
fn toasts_expire_after_their_duration() {
    let stack = ToastStack::new();
    stack.push(Toast::info("short").with_duration(Duration::from_secs(1)));
    stack.push(Toast::error("long").with_duration(Duration::from_secs(30)));

    let later = Instant::now() + Duration::from_secs(5);
    let active = stack.active(later);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].1.message, "long");

    // Expired entries are gone, not merely hidden.
    assert_eq!(stack.len(), 1);
}

#[test]
fn manual_dismissal_removes_a_toast_early() {
    let stack = ToastStack::new();
    let keep = stack.push(Toast::info("keep"));
    let drop_id = stack.push(Toast::warning("dismiss me"));

    assert!(stack.dismiss(drop_id));
    assert!(!stack.dismiss(drop_id), "second dismissal is a no-op");

    let active = stack.active(Instant::now());
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].0, keep);
}

#[test]
fn levels_carry_their_default_durations() {
    assert!(Toast::error("e").duration > Toast::info("i").duration);
    assert_eq!(Toast::with_level("w", ToastLevel::Warning).level, ToastLevel::Warning);
}

#[test]
fn long_messages_truncate_to_display_width() {
    let toast = Toast::info("a rather long notification message");
    let short = toast.truncated_message(12);
    assert!(short.ends_with("..."));
    assert!(short.chars().count() <= 12);

    assert_eq!(Toast::info("short").truncated_message(12), "short");
}
