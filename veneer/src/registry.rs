//! Element registry with hit testing and hover tracking.
//!
//! The registry is the enhancer's replacement for attribute scans over a
//! document: every interactive element is registered explicitly, and
//! pointer events are resolved against the registered rectangles. Elements
//! registered later sit on top of earlier ones, mirroring paint order.

use std::sync::RwLock;

use crate::element::Element;

#[derive(Debug, Default)]
struct RegistryInner {
    elements: Vec<Element>,
    /// Element id currently under the pointer.
    hovered: Option<String>,
}

/// Registered elements plus the current hover state.
#[derive(Debug, Default)]
pub struct Registry {
    inner: RwLock<RegistryInner>,
}

/// Result of a pointer-move update: the element left and the element
/// entered, either of which may be absent.
#[derive(Debug, Default)]
pub struct HoverChange {
    pub left: Option<Element>,
    pub entered: Option<Element>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element. Re-registering an id replaces the previous
    /// entry (keeping its new position in the paint order).
    pub fn register(&self, element: Element) {
        if let Ok(mut inner) = self.inner.write() {
            inner.elements.retain(|e| e.id != element.id);
            inner.elements.push(element);
        }
    }

    /// Remove an element by id.
    pub fn unregister(&self, id: &str) {
        if let Ok(mut inner) = self.inner.write() {
            inner.elements.retain(|e| e.id != id);
            if inner.hovered.as_deref() == Some(id) {
                inner.hovered = None;
            }
        }
    }

    /// Remove every element and reset hover state.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.elements.clear();
            inner.hovered = None;
        }
    }

    /// Look up an element by id.
    pub fn element(&self, id: &str) -> Option<Element> {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.elements.iter().find(|e| e.id == id).cloned())
    }

    /// Find the topmost element containing the point.
    ///
    /// Later registrations win, matching the order the host painted them.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Element> {
        self.inner.read().ok().and_then(|inner| {
            inner
                .elements
                .iter()
                .rev()
                .find(|e| e.rect.contains(x, y))
                .cloned()
        })
    }

    /// The id of the element currently hovered, if any.
    pub fn hovered(&self) -> Option<String> {
        self.inner.read().ok().and_then(|inner| inner.hovered.clone())
    }

    /// Update hover state for a pointer position.
    ///
    /// Returns the elements left and entered so the caller can run
    /// enter/leave behavior (tooltips). Moving within one element reports
    /// no change.
    pub fn update_hover(&self, x: u16, y: u16) -> HoverChange {
        let Ok(mut inner) = self.inner.write() else {
            return HoverChange::default();
        };

        let hit = inner
            .elements
            .iter()
            .rev()
            .find(|e| e.rect.contains(x, y))
            .cloned();
        let hit_id = hit.as_ref().map(|e| e.id.clone());

        if hit_id == inner.hovered {
            return HoverChange::default();
        }

        let previous = inner.hovered.take();
        let left = previous.and_then(|id| inner.elements.iter().find(|e| e.id == id).cloned());
        inner.hovered = hit_id;

        HoverChange { left, entered: hit }
    }
}
