//! Application state and event handling for the HR console.

use std::sync::Arc;

use tokio::sync::mpsc;

use veneer::element::Element;
use veneer::enhancer::{Action, Enhancer};
use veneer::event::{Key, Modifiers, UiEvent};
use veneer::form::{Field, FieldKind, Form, Method};
use veneer::geometry::Rect;
use veneer::submit::SubmitOutcome;
use veneer::table::{Column, Table};
use veneer::toast::ToastLevel;

use crate::directory::{self, Employee, HrClient};
use crate::ui;

/// Default address of the HR backend.
const BACKEND: &str = "http://127.0.0.1:8000";

/// Messages sent back to the event loop from background work.
#[derive(Debug)]
pub enum AppMsg {
    /// A debounced search settled on this query.
    Search(String),
    /// A directory search finished.
    Results(Result<Vec<Employee>, String>),
    /// A form submission settled.
    Submitted(SubmitOutcome),
}

/// Which editable element owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    None,
    Search,
    LeaveType,
    FromDate,
    ToDate,
    Phone,
    Reason,
}

impl Focus {
    /// The registered element id for this focus target.
    fn element_id(self) -> Option<&'static str> {
        match self {
            Focus::None => None,
            Focus::Search => Some("employee-search"),
            Focus::LeaveType => Some("leave-type"),
            Focus::FromDate => Some("from-date"),
            Focus::ToDate => Some("to-date"),
            Focus::Phone => Some("contact-phone"),
            Focus::Reason => Some("reason"),
        }
    }

    /// The bound form field, where the target edits one.
    fn field_name(self) -> Option<&'static str> {
        match self {
            Focus::LeaveType => Some("leave_type"),
            Focus::FromDate => Some("from_date"),
            Focus::ToDate => Some("to_date"),
            Focus::Phone => Some("contact_phone"),
            Focus::Reason => Some("reason"),
            _ => None,
        }
    }
}

pub struct CrewDesk {
    pub enhancer: Arc<Enhancer>,
    pub employees: Table,
    pub leave_form: Form,
    pub query: String,
    pub focus: Focus,
    client: HrClient,
    tx: mpsc::UnboundedSender<AppMsg>,
}

impl CrewDesk {
    pub fn new(tx: mpsc::UnboundedSender<AppMsg>) -> Self {
        let enhancer = Arc::new(Enhancer::new(Rect::from_size(100, 30)));

        let employees = Table::with_rows(
            "employees",
            vec![
                Column::new("Name", ui::COL_NAME).sortable(),
                Column::new("Department", ui::COL_DEPARTMENT).sortable(),
                Column::new("Leaves", ui::COL_LEAVES).sortable(),
            ],
            directory::to_rows(&directory::seed_employees()),
        );
        enhancer.register_table(employees.clone());

        let leave_form = Form::new("leave", format!("{BACKEND}/leave/apply/"))
            .method(Method::Post)
            .submit_label("Apply")
            .field(Field::new("leave_type", "Leave type").required())
            .field(Field::new("from_date", "From date").required())
            .field(Field::new("to_date", "To date").required())
            .field(Field::new("contact_phone", "Contact phone").kind(FieldKind::Phone))
            .field(Field::new("reason", "Reason").required());
        enhancer.register_form(leave_form.clone());

        enhancer.register(
            Element::new("employee-search")
                .rect(ui::SEARCH_RECT)
                .searchable()
                .tooltip("Type to filter the directory"),
        );
        enhancer.register(
            Element::new("employees")
                .rect(ui::TABLE_RECT)
                .sorts("employees"),
        );
        enhancer.register(
            Element::new("apply-open")
                .rect(ui::APPLY_BTN_RECT)
                .opens_modal("apply-leave")
                .tooltip("Open the leave application form"),
        );

        let search_tx = tx.clone();
        enhancer.on_search("employee-search", move |query| {
            let _ = search_tx.send(AppMsg::Search(query));
        });

        Self {
            enhancer,
            employees,
            leave_form,
            query: String::new(),
            focus: Focus::None,
            client: HrClient::new(BACKEND),
            tx,
        }
    }

    /// Handle a terminal event. Returns true when the app should exit.
    pub fn handle_terminal(&mut self, event: &crossterm::event::Event) -> bool {
        let Some(ui_event) = UiEvent::from_crossterm(event) else {
            return false;
        };

        if let UiEvent::Key { key, modifiers } = &ui_event {
            return self.handle_key(*key, *modifiers);
        }

        if let UiEvent::Click { x, y, .. } = &ui_event {
            self.refocus_for_click(*x, *y);
        }

        let actions = self.enhancer.dispatch(&ui_event);
        for action in actions {
            self.handle_action(action);
        }
        false
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> bool {
        match key {
            Key::Char('q') if modifiers.ctrl => return true,
            Key::Escape => {
                if self.enhancer.modals().close_top().is_some() {
                    self.modal_closed();
                } else {
                    return true;
                }
            }
            Key::Tab => self.cycle_focus(),
            Key::Char(c) if !modifiers.ctrl && !modifiers.alt && c != '\0' => {
                self.edit_focused(|value| {
                    value.push(c);
                });
            }
            Key::Backspace => {
                self.edit_focused(|value| {
                    value.pop();
                });
            }
            Key::Enter => {
                if self.enhancer.modals().is_open("apply-leave") {
                    self.request_submit("leave");
                }
            }
            _ => {}
        }
        false
    }

    /// Apply an edit to the focused input and push it through the enhancer.
    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(element_id) = self.focus.element_id() else {
            return;
        };

        let mut value = match self.focus {
            Focus::Search => self.query.clone(),
            _ => self
                .focus
                .field_name()
                .and_then(|name| self.leave_form.get_field(name))
                .map(|field| field.value())
                .unwrap_or_default(),
        };
        edit(&mut value);

        if self.focus == Focus::Search {
            self.query = value.clone();
        }

        let actions = self.enhancer.dispatch(&UiEvent::InputChanged {
            target: element_id.to_string(),
            value,
        });
        for action in actions {
            self.handle_action(action);
        }
    }

    fn cycle_focus(&mut self) {
        let next = if self.enhancer.modals().is_open("apply-leave") {
            match self.focus {
                Focus::LeaveType => Focus::FromDate,
                Focus::FromDate => Focus::ToDate,
                Focus::ToDate => Focus::Phone,
                Focus::Phone => Focus::Reason,
                _ => Focus::LeaveType,
            }
        } else {
            Focus::Search
        };
        self.set_focus(next);
    }

    fn refocus_for_click(&mut self, x: u16, y: u16) {
        let targets = [
            (ui::SEARCH_RECT, Focus::Search),
            (ui::LEAVE_TYPE_RECT, Focus::LeaveType),
            (ui::FROM_DATE_RECT, Focus::FromDate),
            (ui::TO_DATE_RECT, Focus::ToDate),
            (ui::PHONE_RECT, Focus::Phone),
            (ui::REASON_RECT, Focus::Reason),
        ];
        let modal_open = self.enhancer.modals().is_open("apply-leave");

        for (rect, focus) in targets {
            let in_modal = focus != Focus::Search;
            if rect.contains(x, y) && (modal_open || !in_modal) {
                self.set_focus(focus);
                return;
            }
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        if focus == self.focus {
            return;
        }
        // Blur revalidates the field being left.
        if let Some(old) = self.focus.element_id() {
            let actions = self.enhancer.dispatch(&UiEvent::Blur {
                target: old.to_string(),
            });
            for action in actions {
                self.handle_action(action);
            }
        }
        self.focus = focus;
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::SubmitRequested { form } => self.request_submit(&form),
            Action::ModalOpened { modal } => {
                if modal == "apply-leave" {
                    self.modal_opened();
                }
            }
            Action::ModalClosed { modal } => {
                if modal == "apply-leave" {
                    self.modal_closed();
                }
            }
            Action::TableSorted {
                column, direction, ..
            } => {
                log::debug!("directory sorted by column {} {:?}", column, direction);
            }
            Action::FieldValidated { .. } => {}
        }
    }

    /// Register the modal's interactive elements while it is open.
    fn modal_opened(&mut self) {
        let fields = [
            ("leave-type", "leave_type", ui::LEAVE_TYPE_RECT, false),
            ("from-date", "from_date", ui::FROM_DATE_RECT, false),
            ("to-date", "to_date", ui::TO_DATE_RECT, false),
            ("contact-phone", "contact_phone", ui::PHONE_RECT, false),
            ("reason", "reason", ui::REASON_RECT, true),
        ];
        for (element_id, field, rect, autosaved) in fields {
            let mut element = Element::new(element_id)
                .rect(rect)
                .edits_field("leave", field);
            if autosaved {
                element = element.autosaves("leave");
            }
            self.enhancer.register(element);
        }
        self.enhancer.register(
            Element::new("apply-submit")
                .rect(ui::SUBMIT_BTN_RECT)
                .submits("leave")
                .tooltip("Submit the leave request"),
        );
        self.enhancer.register(
            Element::new("apply-cancel")
                .rect(ui::CANCEL_BTN_RECT)
                .closes_modal()
                .tooltip("Discard and close"),
        );
        self.set_focus(Focus::LeaveType);
    }

    fn modal_closed(&mut self) {
        for id in [
            "leave-type",
            "from-date",
            "to-date",
            "contact-phone",
            "reason",
            "apply-submit",
            "apply-cancel",
        ] {
            self.enhancer.unregister(id);
        }
        self.set_focus(Focus::None);
    }

    fn request_submit(&self, form: &str) {
        let enhancer = Arc::clone(&self.enhancer);
        let tx = self.tx.clone();
        let form = form.to_string();
        tokio::spawn(async move {
            let outcome = enhancer.submit(&form, true).await;
            let _ = tx.send(AppMsg::Submitted(outcome));
        });
    }

    /// Handle a message from background work.
    pub fn handle_message(&mut self, msg: AppMsg) {
        match msg {
            AppMsg::Search(query) => {
                log::debug!("searching directory for '{}'", query);
                let client = self.client.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = client
                        .search(&query)
                        .await
                        .map_err(|e| e.to_string());
                    let _ = tx.send(AppMsg::Results(result));
                });
            }
            AppMsg::Results(Ok(employees)) => {
                self.employees.set_rows(directory::to_rows(&employees));
            }
            AppMsg::Results(Err(error)) => {
                log::warn!("directory search failed: {}", error);
                self.enhancer
                    .notify("Search is unavailable right now.", ToastLevel::Warning);
            }
            AppMsg::Submitted(outcome) => {
                if let SubmitOutcome::Accepted { redirect, .. } = &outcome {
                    if self.enhancer.modals().close("apply-leave") {
                        self.modal_closed();
                    }
                    if let Some(url) = redirect {
                        // A console has nowhere to navigate; record the
                        // server's intent instead.
                        log::info!("server redirect to {}", url);
                    }
                }
            }
        }
    }
}
