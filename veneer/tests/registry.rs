//! Tests for capability dispatch: clicks, modals, sorting, field events.

use veneer::element::Element;
use veneer::enhancer::{Action, Enhancer};
use veneer::event::{MouseButton, UiEvent};
use veneer::form::{Field, Form};
use veneer::geometry::Rect;
use veneer::table::{Column, Row, SortDirection, Table};

fn click(x: u16, y: u16) -> UiEvent {
    UiEvent::Click {
        x,
        y,
        button: MouseButton::Left,
    }
}

#[test]
fn modal_target_and_close_drive_the_stack() {
    let enhancer = Enhancer::new(Rect::from_size(80, 24));
    enhancer.register(
        Element::new("open-confirm")
            .rect(Rect::new(0, 0, 10, 1))
            .opens_modal("confirm-delete"),
    );
    enhancer.register(
        Element::new("cancel")
            .rect(Rect::new(20, 0, 10, 1))
            .closes_modal(),
    );

    let actions = enhancer.dispatch(&click(2, 0));
    assert_eq!(
        actions,
        vec![Action::ModalOpened {
            modal: "confirm-delete".into()
        }]
    );
    assert!(enhancer.modals().is_open("confirm-delete"));

    let actions = enhancer.dispatch(&click(22, 0));
    assert_eq!(
        actions,
        vec![Action::ModalClosed {
            modal: "confirm-delete".into()
        }]
    );
    assert!(enhancer.modals().is_empty());

    // Closing with nothing open reports nothing.
    assert!(enhancer.dispatch(&click(22, 0)).is_empty());
}

#[test]
fn reopening_a_modal_moves_it_to_the_top() {
    let enhancer = Enhancer::new(Rect::from_size(80, 24));
    enhancer.modals().open("a");
    enhancer.modals().open("b");
    enhancer.modals().open("a");

    assert_eq!(enhancer.modals().len(), 2);
    assert_eq!(enhancer.modals().top().as_deref(), Some("a"));
}

#[test]
fn submit_click_requests_submission_of_the_registered_form() {
    let enhancer = Enhancer::new(Rect::from_size(80, 24));
    enhancer.register_form(Form::new("leave", "/leave/apply/"));
    enhancer.register(
        Element::new("leave-submit")
            .rect(Rect::new(0, 20, 12, 1))
            .submits("leave"),
    );
    enhancer.register(
        Element::new("orphan-submit")
            .rect(Rect::new(20, 20, 12, 1))
            .submits("missing"),
    );

    assert_eq!(
        enhancer.dispatch(&click(3, 20)),
        vec![Action::SubmitRequested {
            form: "leave".into()
        }]
    );

    // Unknown form: degraded to a log line, no action.
    assert!(enhancer.dispatch(&click(21, 20)).is_empty());
}

#[test]
fn header_clicks_toggle_sort_by_column() {
    let enhancer = Enhancer::new(Rect::from_size(80, 24));
    let table = Table::with_rows(
        "employees",
        vec![
            Column::new("Name", 10).sortable(),
            Column::new("Reports", 8).sortable(),
        ],
        vec![
            Row::new("e1", vec!["bob".into(), "10".into()]),
            Row::new("e2", vec!["alice".into(), "2".into()]),
        ],
    );
    enhancer.register_table(table.clone());
    enhancer.register(
        Element::new("employees")
            .rect(Rect::new(5, 4, 18, 10))
            .sorts("employees"),
    );

    // Click in the second column of the header row.
    let actions = enhancer.dispatch(&click(16, 4));
    assert_eq!(
        actions,
        vec![Action::TableSorted {
            table: "employees".into(),
            column: 1,
            direction: SortDirection::Ascending,
        }]
    );
    assert_eq!(table.rows()[0].id, "e2");

    // Clicks below the header row do not sort.
    assert!(enhancer.dispatch(&click(16, 5)).is_empty());
}

#[test]
fn input_and_blur_revalidate_the_bound_field() {
    let enhancer = Enhancer::new(Rect::from_size(80, 24));
    let email = Field::new("email", "Email")
        .kind(veneer::form::FieldKind::Email)
        .required();
    enhancer.register_form(Form::new("profile", "/profile/").field(email.clone()));
    enhancer.register(Element::new("profile-email").edits_field("profile", "email"));

    let actions = enhancer.dispatch(&UiEvent::InputChanged {
        target: "profile-email".into(),
        value: "oops".into(),
    });
    assert_eq!(
        actions,
        vec![Action::FieldValidated {
            form: "profile".into(),
            field: "email".into(),
            valid: false,
        }]
    );
    assert_eq!(email.value(), "oops");
    assert!(email.has_error());

    email.set_value("jane@example.com");
    let actions = enhancer.dispatch(&UiEvent::Blur {
        target: "profile-email".into(),
    });
    assert_eq!(
        actions,
        vec![Action::FieldValidated {
            form: "profile".into(),
            field: "email".into(),
            valid: true,
        }]
    );
    assert!(!email.has_error());
}

#[test]
fn later_registrations_sit_on_top_for_hit_testing() {
    let enhancer = Enhancer::new(Rect::from_size(80, 24));
    enhancer.register(
        Element::new("under")
            .rect(Rect::new(0, 0, 20, 5))
            .opens_modal("under-modal"),
    );
    enhancer.register(
        Element::new("over")
            .rect(Rect::new(5, 1, 4, 1))
            .opens_modal("over-modal"),
    );

    enhancer.dispatch(&click(6, 1));
    assert!(enhancer.modals().is_open("over-modal"));
    assert!(!enhancer.modals().is_open("under-modal"));
}

#[test]
fn enhancer_entry_points_cover_registered_state() {
    let enhancer = Enhancer::new(Rect::from_size(80, 24));
    let field = Field::new("first_name", "First name").required();
    enhancer.register_form(Form::new("profile", "/profile/").field(field.clone()));

    assert!(!enhancer.validate_field("profile", "first_name"));
    assert!(!enhancer.validate_form("profile"));

    field.set_value("Jane");
    assert!(enhancer.validate_field("profile", "first_name"));
    assert!(enhancer.validate_form("profile"));

    // Unknown ids validate to false rather than panicking.
    assert!(!enhancer.validate_field("profile", "nope"));
    assert!(!enhancer.validate_form("nope"));
    assert!(enhancer.sort_table("nope", 0).is_none());
}
