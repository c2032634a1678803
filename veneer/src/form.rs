//! Form and field state.
//!
//! `Field` and `Form` are cheap handles over shared interior state, so the
//! host application, the registry, and in-flight submissions can all observe
//! the same values. All methods take `&self`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// The kind of value a field holds; drives which validation rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Phone,
}

/// HTTP method a form submits with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    Get,
    #[default]
    Post,
}

#[derive(Debug, Default)]
struct FieldInner {
    label: String,
    value: String,
    /// Validation error message (if any).
    error: Option<String>,
}

/// A labeled input with a required flag, a kind, and a current value.
///
/// Invalid state is a single inline error message, set and cleared by
/// revalidation.
#[derive(Debug)]
pub struct Field {
    name: String,
    kind: FieldKind,
    required: bool,
    inner: Arc<RwLock<FieldInner>>,
    dirty: Arc<AtomicBool>,
}

impl Field {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Text,
            required: false,
            inner: Arc::new(RwLock::new(FieldInner {
                label: label.into(),
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the field kind.
    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set an initial value.
    pub fn with_value(self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self.dirty.store(false, Ordering::SeqCst);
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn label(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.label.clone())
            .unwrap_or_default()
    }

    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// The current inline error message, if the field is invalid.
    pub fn error(&self) -> Option<String> {
        self.inner.read().ok().and_then(|guard| guard.error.clone())
    }

    pub fn has_error(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.error.is_some())
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn set_error(&self, message: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error = Some(message.into());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn clear_error(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.error.is_some()
        {
            guard.error = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for Field {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind,
            required: self.required,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

#[derive(Debug)]
struct FormInner {
    action: String,
    method: Method,
    fields: Vec<Field>,
    submit_label: String,
    submit_enabled: bool,
}

/// A form: an action URL, a method, an ordered set of fields, and the state
/// of its submit control.
#[derive(Debug)]
pub struct Form {
    id: String,
    inner: Arc<RwLock<FormInner>>,
    dirty: Arc<AtomicBool>,
}

impl Form {
    pub fn new(id: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inner: Arc::new(RwLock::new(FormInner {
                action: action.into(),
                method: Method::default(),
                fields: Vec::new(),
                submit_label: "Save".to_string(),
                submit_enabled: true,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the submission method.
    pub fn method(self, method: Method) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.method = method;
        }
        self
    }

    /// Append a field.
    pub fn field(self, field: Field) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.fields.push(field);
        }
        self
    }

    /// Set the submit control's label.
    pub fn submit_label(self, label: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.submit_label = label.into();
        }
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn action(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.action.clone())
            .unwrap_or_default()
    }

    pub fn submit_method(&self) -> Method {
        self.inner
            .read()
            .map(|guard| guard.method)
            .unwrap_or_default()
    }

    pub fn fields(&self) -> Vec<Field> {
        self.inner
            .read()
            .map(|guard| guard.fields.clone())
            .unwrap_or_default()
    }

    /// Look up a field by name.
    pub fn get_field(&self, name: &str) -> Option<Field> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.fields.iter().find(|f| f.name() == name).cloned())
    }

    /// Field names and current values, in declaration order, ready for
    /// form encoding.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.fields()
            .iter()
            .map(|f| (f.name().to_string(), f.value()))
            .collect()
    }

    pub fn submit_button_label(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.submit_label.clone())
            .unwrap_or_default()
    }

    pub fn submit_enabled(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.submit_enabled)
            .unwrap_or(true)
    }

    // -------------------------------------------------------------------------
    // Submission state
    // -------------------------------------------------------------------------

    /// Disable the submit control for the duration of a submission.
    ///
    /// The returned guard restores the original label and enabled state when
    /// dropped, so every exit path of a submission (success, rejection,
    /// transport failure, panic) puts the control back.
    pub fn begin_submit(&self) -> SubmitGuard {
        let (label, enabled) = self
            .inner
            .read()
            .map(|guard| (guard.submit_label.clone(), guard.submit_enabled))
            .unwrap_or_else(|_| ("Save".to_string(), true));

        if let Ok(mut guard) = self.inner.write() {
            guard.submit_label = "Please wait...".to_string();
            guard.submit_enabled = false;
        }
        self.dirty.store(true, Ordering::SeqCst);

        SubmitGuard {
            form: self.clone(),
            label,
            enabled,
        }
    }

    fn restore_submit(&self, label: &str, enabled: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.submit_label = label.to_string();
            guard.submit_enabled = enabled;
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst) || self.fields().iter().any(|f| f.is_dirty())
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
        for field in self.fields() {
            field.clear_dirty();
        }
    }
}

impl Clone for Form {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

/// Restores a form's submit control when dropped.
#[derive(Debug)]
pub struct SubmitGuard {
    form: Form,
    label: String,
    enabled: bool,
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.form.restore_submit(&self.label, self.enabled);
    }
}
