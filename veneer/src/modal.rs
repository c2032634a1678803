//! Modal open/close state.
//!
//! Open modals form a stack: target elements push the modal they name,
//! close elements pop the topmost. The enhancer only tracks which modals
//! are open; rendering them is the host's concern.

use std::sync::{Arc, RwLock};

/// The stack of open modals, topmost last.
#[derive(Debug, Default)]
pub struct ModalStack {
    inner: Arc<RwLock<Vec<String>>>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a modal. An already-open modal moves to the top instead of
    /// appearing twice.
    pub fn open(&self, name: impl Into<String>) {
        let name = name.into();
        if let Ok(mut stack) = self.inner.write() {
            stack.retain(|m| *m != name);
            stack.push(name);
        }
    }

    /// Close the topmost modal, returning its name.
    pub fn close_top(&self) -> Option<String> {
        self.inner.write().ok().and_then(|mut stack| stack.pop())
    }

    /// Close a specific modal. Returns false if it was not open.
    pub fn close(&self, name: &str) -> bool {
        if let Ok(mut stack) = self.inner.write() {
            let before = stack.len();
            stack.retain(|m| m != name);
            return stack.len() != before;
        }
        false
    }

    pub fn is_open(&self, name: &str) -> bool {
        self.inner
            .read()
            .map(|stack| stack.iter().any(|m| m == name))
            .unwrap_or(false)
    }

    /// The topmost open modal.
    pub fn top(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|stack| stack.last().cloned())
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|stack| stack.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Clone for ModalStack {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
