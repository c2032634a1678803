//! The enhancer: one owner for every enhancement behavior.
//!
//! An [`Enhancer`] holds the element registry, the toast stack, the single
//! tooltip slot, the modal stack, and the forms and tables behaviors are
//! bound to. The host feeds it [`UiEvent`]s; synchronous behaviors run in
//! place and anything the host must act on comes back as [`Action`]s.
//!
//! # Example
//!
//! ```ignore
//! let enhancer = Enhancer::new(Rect::from_size(80, 24));
//! enhancer.register_table(employees.clone());
//! enhancer.register(
//!     Element::new("employees")
//!         .rect(Rect::new(0, 4, 72, 12))
//!         .sorts("employees"),
//! );
//!
//! for action in enhancer.dispatch(&event) {
//!     match action {
//!         Action::SubmitRequested { form } => { /* await enhancer.submit(...) */ }
//!         _ => {}
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::debounce::{DEFAULT_SEARCH_DELAY, Debouncer};
use crate::element::{Binding, Element};
use crate::event::UiEvent;
use crate::form::Form;
use crate::geometry::Rect;
use crate::modal::ModalStack;
use crate::registry::Registry;
use crate::submit::{SubmitOutcome, Submitter};
use crate::table::{SortDirection, Table};
use crate::toast::{Toast, ToastId, ToastLevel, ToastStack};
use crate::tooltip::Tooltip;
use crate::validation;

const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";
const NETWORK_FAILURE: &str = "Network error. Please check your connection.";
const GENERIC_SUCCESS: &str = "Saved successfully";

/// Handler invoked with the query text once a debounced search settles.
pub type SearchHandler = Arc<dyn Fn(String) + Send + Sync>;

struct SearchEntry {
    debouncer: Debouncer,
    handler: SearchHandler,
}

/// Something the host must act on after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A submit control was activated; the host should await
    /// [`Enhancer::submit`] for this form.
    SubmitRequested { form: String },
    /// A modal was opened.
    ModalOpened { modal: String },
    /// A modal was closed.
    ModalClosed { modal: String },
    /// A table was re-sorted.
    TableSorted {
        table: String,
        column: usize,
        direction: SortDirection,
    },
    /// A field was revalidated.
    FieldValidated {
        form: String,
        field: String,
        valid: bool,
    },
}

/// The enhancement engine.
pub struct Enhancer {
    registry: Registry,
    toasts: ToastStack,
    modals: ModalStack,
    submitter: Submitter,
    /// The single active tooltip; replaced, never duplicated.
    tooltip: RwLock<Option<Tooltip>>,
    screen: RwLock<Rect>,
    forms: RwLock<HashMap<String, Form>>,
    tables: RwLock<HashMap<String, Table>>,
    searches: RwLock<HashMap<String, SearchEntry>>,
}

impl Enhancer {
    pub fn new(screen: Rect) -> Self {
        Self {
            registry: Registry::new(),
            toasts: ToastStack::new(),
            modals: ModalStack::new(),
            submitter: Submitter::new(),
            tooltip: RwLock::new(None),
            screen: RwLock::new(screen),
            forms: RwLock::new(HashMap::new()),
            tables: RwLock::new(HashMap::new()),
            searches: RwLock::new(HashMap::new()),
        }
    }

    /// Use a preconfigured HTTP client for submissions.
    pub fn with_submitter(mut self, submitter: Submitter) -> Self {
        self.submitter = submitter;
        self
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    /// Register an interactive element and the capabilities it declares.
    pub fn register(&self, element: Element) {
        self.registry.register(element);
    }

    /// Remove an element; its capabilities stop firing.
    pub fn unregister(&self, id: &str) {
        self.registry.unregister(id);
    }

    /// Make a form available to `Submit`, `Field` and `Autosave` bindings.
    pub fn register_form(&self, form: Form) {
        if let Ok(mut forms) = self.forms.write() {
            forms.insert(form.id().to_string(), form);
        }
    }

    /// Make a table available to `Sort` bindings.
    pub fn register_table(&self, table: Table) {
        if let Ok(mut tables) = self.tables.write() {
            tables.insert(table.id().to_string(), table);
        }
    }

    /// Attach a search handler to a searchable element, debounced with the
    /// default quiet period.
    pub fn on_search<F>(&self, element_id: impl Into<String>, handler: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        if let Ok(mut searches) = self.searches.write() {
            searches.insert(
                element_id.into(),
                SearchEntry {
                    debouncer: Debouncer::new(DEFAULT_SEARCH_DELAY),
                    handler: Arc::new(handler),
                },
            );
        }
    }

    pub fn form(&self, id: &str) -> Option<Form> {
        self.forms.read().ok().and_then(|forms| forms.get(id).cloned())
    }

    pub fn table(&self, id: &str) -> Option<Table> {
        self.tables
            .read()
            .ok()
            .and_then(|tables| tables.get(id).cloned())
    }

    // -------------------------------------------------------------------------
    // Event dispatch
    // -------------------------------------------------------------------------

    /// Run the enhancement behaviors for one event.
    pub fn dispatch(&self, event: &UiEvent) -> Vec<Action> {
        match event {
            UiEvent::Click { x, y, .. } => self.on_click(*x, *y),
            UiEvent::MouseMove { x, y } => {
                self.on_mouse_move(*x, *y);
                Vec::new()
            }
            UiEvent::InputChanged { target, value } => self.on_input(target, value),
            UiEvent::Blur { target } => self.on_blur(target),
            UiEvent::Resize { width, height } => {
                if let Ok(mut screen) = self.screen.write() {
                    *screen = Rect::from_size(*width, *height);
                }
                // Stale geometry: drop the tooltip rather than redraw it
                // somewhere wrong.
                self.hide_tooltip();
                Vec::new()
            }
            UiEvent::Key { .. } => Vec::new(),
        }
    }

    fn on_click(&self, x: u16, y: u16) -> Vec<Action> {
        let Some(element) = self.registry.hit_test(x, y) else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        for binding in &element.bindings {
            match binding {
                Binding::ModalTarget { modal } => {
                    self.modals.open(modal.clone());
                    log::debug!("modal '{}' opened by '{}'", modal, element.id);
                    actions.push(Action::ModalOpened {
                        modal: modal.clone(),
                    });
                }
                Binding::ModalClose => {
                    if let Some(modal) = self.modals.close_top() {
                        log::debug!("modal '{}' closed by '{}'", modal, element.id);
                        actions.push(Action::ModalClosed { modal });
                    }
                }
                Binding::Submit { form } => {
                    if self.form(form).is_some() {
                        actions.push(Action::SubmitRequested { form: form.clone() });
                    } else {
                        log::warn!("submit binding on '{}' names unknown form '{}'", element.id, form);
                    }
                }
                Binding::Sort { table } => {
                    if let Some(action) = self.on_sort_click(&element, table, x, y) {
                        actions.push(action);
                    }
                }
                _ => {}
            }
        }
        actions
    }

    fn on_sort_click(&self, element: &Element, table_id: &str, x: u16, y: u16) -> Option<Action> {
        // Only the header row toggles sorting.
        if y != element.rect.y {
            return None;
        }
        let Some(table) = self.table(table_id) else {
            log::warn!("sort binding on '{}' names unknown table '{}'", element.id, table_id);
            return None;
        };

        let column = table.column_from_x(x.saturating_sub(element.rect.x))?;
        let (column, direction) = table.toggle_sort(column)?;
        Some(Action::TableSorted {
            table: table_id.to_string(),
            column,
            direction,
        })
    }

    fn on_mouse_move(&self, x: u16, y: u16) {
        let change = self.registry.update_hover(x, y);

        if change.left.is_some() || change.entered.is_some() {
            match change.entered.as_ref().and_then(|e| e.tooltip_text()) {
                Some(text) => {
                    let entered = change.entered.as_ref().map(|e| e.rect).unwrap_or_default();
                    self.show_tooltip(text, entered);
                }
                None => self.hide_tooltip(),
            }
        }
    }

    fn on_input(&self, target: &str, value: &str) -> Vec<Action> {
        let Some(element) = self.registry.element(target) else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        for binding in &element.bindings {
            match binding {
                Binding::Field { form, field } => {
                    if let Some(action) = self.revalidate(form, field, Some(value)) {
                        actions.push(action);
                    }
                }
                Binding::Search => {
                    if let Ok(searches) = self.searches.read()
                        && let Some(entry) = searches.get(target)
                    {
                        let handler = Arc::clone(&entry.handler);
                        let query = value.to_string();
                        entry.debouncer.trigger(move || handler(query));
                    }
                }
                Binding::Autosave { form } => {
                    // Intentionally a stub: the action is logged, nothing is
                    // persisted.
                    log::info!("auto-save requested for form '{}'", form);
                }
                _ => {}
            }
        }
        actions
    }

    fn on_blur(&self, target: &str) -> Vec<Action> {
        let Some(element) = self.registry.element(target) else {
            return Vec::new();
        };

        element
            .bindings
            .iter()
            .filter_map(|binding| match binding {
                Binding::Field { form, field } => self.revalidate(form, field, None),
                _ => None,
            })
            .collect()
    }

    fn revalidate(&self, form_id: &str, field_name: &str, new_value: Option<&str>) -> Option<Action> {
        let form = self.form(form_id)?;
        let field = form.get_field(field_name)?;
        if let Some(value) = new_value {
            field.set_value(value);
        }
        let valid = validation::validate_field(&field);
        Some(Action::FieldValidated {
            form: form_id.to_string(),
            field: field_name.to_string(),
            valid,
        })
    }

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    /// Show a toast.
    pub fn notify(&self, message: impl Into<String>, level: ToastLevel) -> ToastId {
        self.toasts.push(Toast::with_level(message, level))
    }

    pub fn toasts(&self) -> &ToastStack {
        &self.toasts
    }

    // -------------------------------------------------------------------------
    // Validation and sorting entry points
    // -------------------------------------------------------------------------

    /// Validate one field of a registered form.
    pub fn validate_field(&self, form_id: &str, field_name: &str) -> bool {
        self.form(form_id)
            .and_then(|form| form.get_field(field_name))
            .map(|field| validation::validate_field(&field))
            .unwrap_or(false)
    }

    /// Validate every field of a registered form. All fields are checked so
    /// all errors display.
    pub fn validate_form(&self, form_id: &str) -> bool {
        self.form(form_id)
            .map(|form| validation::validate_form(&form).is_valid())
            .unwrap_or(false)
    }

    /// Toggle sorting of a registered table's column.
    pub fn sort_table(&self, table_id: &str, column: usize) -> Option<(usize, SortDirection)> {
        self.table(table_id)?.toggle_sort(column)
    }

    // -------------------------------------------------------------------------
    // Tooltip
    // -------------------------------------------------------------------------

    fn show_tooltip(&self, text: &str, anchor: Rect) {
        let screen = self.screen.read().map(|s| *s).unwrap_or_default();
        if let Ok(mut slot) = self.tooltip.write() {
            // Replace the previous tooltip; at most one exists at a time.
            *slot = Some(Tooltip::new(text, anchor, screen));
        }
    }

    fn hide_tooltip(&self) {
        if let Ok(mut slot) = self.tooltip.write() {
            *slot = None;
        }
    }

    /// The active tooltip, if any.
    pub fn tooltip(&self) -> Option<Tooltip> {
        self.tooltip.read().ok().and_then(|slot| slot.clone())
    }

    // -------------------------------------------------------------------------
    // Modals
    // -------------------------------------------------------------------------

    pub fn modals(&self) -> &ModalStack {
        &self.modals
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Submit a registered form in the background.
    ///
    /// Validates first when `validate` is set; an invalid form is rejected
    /// locally without a request. Each outcome raises the matching toast,
    /// and the submit control is restored whichever way the request
    /// settles.
    pub async fn submit(&self, form_id: &str, validate: bool) -> SubmitOutcome {
        let Some(form) = self.form(form_id) else {
            log::warn!("submit requested for unknown form '{}'", form_id);
            return SubmitOutcome::Rejected {
                message: GENERIC_FAILURE.to_string(),
            };
        };

        if validate && !validation::validate_form(&form).is_valid() {
            self.notify("Please correct the highlighted fields.", ToastLevel::Error);
            return SubmitOutcome::Rejected {
                message: "validation failed".to_string(),
            };
        }

        let _guard = form.begin_submit();

        match self.submitter.send(&form).await {
            Ok(envelope) if envelope.success => {
                let message = envelope
                    .message
                    .unwrap_or_else(|| GENERIC_SUCCESS.to_string());
                self.notify(message.clone(), ToastLevel::Success);
                SubmitOutcome::Accepted {
                    message,
                    redirect: envelope.redirect,
                }
            }
            Ok(envelope) => {
                let message = envelope
                    .message
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string());
                self.notify(message.clone(), ToastLevel::Error);
                SubmitOutcome::Rejected { message }
            }
            Err(err) => {
                log::warn!("submission of '{}' failed: {}", form_id, err);
                self.notify(NETWORK_FAILURE, ToastLevel::Error);
                SubmitOutcome::TransportFailed
            }
        }
    }
}
