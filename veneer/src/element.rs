//! Elements and their declared capabilities.
//!
//! An [`Element`] is the enhancer's description of an interactive region of
//! the screen: an id, a bounding rectangle, and zero or more [`Binding`]s
//! naming the behaviors it participates in. Registering an element with a
//! binding is what enables the corresponding behavior; there is no ambient
//! lookup by class or attribute.

use crate::geometry::Rect;

/// A capability declared on an element.
///
/// Each variant corresponds to one enhancer behavior. String payloads name
/// the form, field, table or modal the behavior operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// Show this text in a tooltip while the element is hovered.
    Tooltip { text: String },
    /// Clicking opens the named modal.
    ModalTarget { modal: String },
    /// Clicking closes the topmost open modal.
    ModalClose,
    /// The element edits the named field; input and blur revalidate it.
    Field { form: String, field: String },
    /// Clicking requests submission of the named form.
    Submit { form: String },
    /// Clicks in the element's header row toggle sorting of the named table.
    Sort { table: String },
    /// Input is debounced and forwarded to the registered search handler.
    Search,
    /// Input triggers the auto-save stub for the named form.
    Autosave { form: String },
}

/// An interactive element registered with the enhancer.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,
    pub rect: Rect,
    pub bindings: Vec<Binding>,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rect: Rect::default(),
            bindings: Vec::new(),
        }
    }

    /// Set the element's bounding rectangle.
    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// Attach an arbitrary binding.
    pub fn binding(mut self, binding: Binding) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Show `text` as a tooltip while hovered.
    pub fn tooltip(self, text: impl Into<String>) -> Self {
        self.binding(Binding::Tooltip { text: text.into() })
    }

    /// Open the named modal on click.
    pub fn opens_modal(self, modal: impl Into<String>) -> Self {
        self.binding(Binding::ModalTarget {
            modal: modal.into(),
        })
    }

    /// Close the topmost modal on click.
    pub fn closes_modal(self) -> Self {
        self.binding(Binding::ModalClose)
    }

    /// Bind to a form field for validation on input and blur.
    pub fn edits_field(self, form: impl Into<String>, field: impl Into<String>) -> Self {
        self.binding(Binding::Field {
            form: form.into(),
            field: field.into(),
        })
    }

    /// Request submission of the named form on click.
    pub fn submits(self, form: impl Into<String>) -> Self {
        self.binding(Binding::Submit { form: form.into() })
    }

    /// Toggle sorting of the named table on header clicks.
    pub fn sorts(self, table: impl Into<String>) -> Self {
        self.binding(Binding::Sort {
            table: table.into(),
        })
    }

    /// Debounce input and forward it to the registered search handler.
    pub fn searchable(self) -> Self {
        self.binding(Binding::Search)
    }

    /// Trigger the auto-save stub for the named form on input.
    pub fn autosaves(self, form: impl Into<String>) -> Self {
        self.binding(Binding::Autosave { form: form.into() })
    }

    /// The tooltip text, if a tooltip binding is declared.
    pub fn tooltip_text(&self) -> Option<&str> {
        self.bindings.iter().find_map(|b| match b {
            Binding::Tooltip { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Whether the element declares the search capability.
    pub fn is_searchable(&self) -> bool {
        self.bindings.contains(&Binding::Search)
    }
}
