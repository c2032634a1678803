//! Toast notifications.
//!
//! Toasts are ephemeral messages with a severity level and a lifetime. New
//! toasts stack on top; each one self-removes after its duration elapses or
//! when dismissed manually.
//!
//! # Example
//!
//! ```ignore
//! let toasts = ToastStack::new();
//! toasts.push(Toast::success("Leave request submitted"));
//! toasts.push(Toast::error("Network error. Please try again."));
//!
//! for (id, toast) in toasts.active(Instant::now()) {
//!     println!("[{:?}] {}", toast.level, toast.message);
//! }
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Severity level of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// A toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    /// How long to show the toast before it self-removes.
    pub duration: Duration,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Info,
            duration: Duration::from_secs(3),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Success,
            duration: Duration::from_secs(3),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Warning,
            duration: Duration::from_secs(4),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Error,
            duration: Duration::from_secs(5),
        }
    }

    /// Build a toast for an arbitrary level with that level's default
    /// duration.
    pub fn with_level(message: impl Into<String>, level: ToastLevel) -> Self {
        match level {
            ToastLevel::Info => Self::info(message),
            ToastLevel::Success => Self::success(message),
            ToastLevel::Warning => Self::warning(message),
            ToastLevel::Error => Self::error(message),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// The message truncated to a display width, with an ellipsis when cut.
    pub fn truncated_message(&self, max_width: usize) -> String {
        if self.message.width() <= max_width {
            return self.message.clone();
        }
        let budget = max_width.saturating_sub(3);
        let mut out = String::new();
        let mut used = 0;
        for c in self.message.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > budget {
                break;
            }
            used += w;
            out.push(c);
        }
        out.push_str("...");
        out
    }
}

impl From<String> for Toast {
    fn from(message: String) -> Self {
        Toast::info(message)
    }
}

impl From<&str> for Toast {
    fn from(message: &str) -> Self {
        Toast::info(message)
    }
}

/// Identifier handed out for manual dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(usize);

impl ToastId {
    fn next() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

#[derive(Debug)]
struct ToastEntry {
    id: ToastId,
    toast: Toast,
    created_at: Instant,
}

/// The active toasts, newest first.
#[derive(Debug, Default)]
pub struct ToastStack {
    inner: Arc<RwLock<Vec<ToastEntry>>>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a toast onto the stack. Newest toasts render first.
    pub fn push(&self, toast: impl Into<Toast>) -> ToastId {
        let id = ToastId::next();
        if let Ok(mut entries) = self.inner.write() {
            entries.insert(
                0,
                ToastEntry {
                    id,
                    toast: toast.into(),
                    created_at: Instant::now(),
                },
            );
        }
        id
    }

    /// Dismiss a toast before its lifetime elapses.
    ///
    /// Returns false if the toast already expired or was dismissed.
    pub fn dismiss(&self, id: ToastId) -> bool {
        if let Ok(mut entries) = self.inner.write() {
            let before = entries.len();
            entries.retain(|e| e.id != id);
            return entries.len() != before;
        }
        false
    }

    /// Drop expired toasts and return the ones still visible, newest first.
    pub fn active(&self, now: Instant) -> Vec<(ToastId, Toast)> {
        if let Ok(mut entries) = self.inner.write() {
            entries.retain(|e| now.duration_since(e.created_at) < e.toast.duration);
            return entries.iter().map(|e| (e.id, e.toast.clone())).collect();
        }
        Vec::new()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Clone for ToastStack {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
