//! Interaction enhancements for console front-ends: field validation,
//! sortable tables, toast notifications, tooltips, modal toggling,
//! debounced search and background form submission, activated through an
//! explicit capability registry.

pub mod debounce;
pub mod element;
pub mod enhancer;
pub mod event;
pub mod form;
pub mod geometry;
pub mod modal;
pub mod registry;
pub mod submit;
pub mod table;
pub mod toast;
pub mod tooltip;
pub mod validation;

pub use enhancer::{Action, Enhancer};
pub use validation::{validate_field, validate_form};

/// Toggle sorting of a table column. See [`table::Table::toggle_sort`].
pub fn sort_table(table: &table::Table, column: usize) -> Option<(usize, table::SortDirection)> {
    table.toggle_sort(column)
}

pub mod prelude {
    pub use crate::debounce::Debouncer;
    pub use crate::element::{Binding, Element};
    pub use crate::enhancer::{Action, Enhancer, SearchHandler};
    pub use crate::event::{Key, Modifiers, MouseButton, UiEvent};
    pub use crate::form::{Field, FieldKind, Form, Method};
    pub use crate::geometry::Rect;
    pub use crate::modal::ModalStack;
    pub use crate::submit::{SubmitOutcome, SubmitResponse, Submitter};
    pub use crate::table::{Column, Row, SortDirection, Table};
    pub use crate::toast::{Toast, ToastId, ToastLevel, ToastStack};
    pub use crate::tooltip::Tooltip;
    pub use crate::validation::{FieldError, ValidationResult, validate_field, validate_form};
}
