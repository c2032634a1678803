//! Tests for field and form validation.

use veneer::form::{Field, FieldKind, Form};
use veneer::validation::{validate_field, validate_form};

fn required_text(name: &str) -> Field {
    Field::new(name, name).required()
}

#[test]
fn required_empty_field_is_invalid() {
    let field = required_text("first_name");
    assert!(!validate_field(&field));
    assert_eq!(field.error().as_deref(), Some("This field is required"));

    let field = required_text("last_name").with_value("   ");
    assert!(!validate_field(&field), "whitespace-only counts as empty");
}

#[test]
fn required_field_with_value_is_valid() {
    let field = required_text("first_name").with_value("Jane");
    assert!(validate_field(&field));
    assert!(field.error().is_none());
}

#[test]
fn optional_empty_field_is_valid() {
    let field = Field::new("nickname", "Nickname");
    assert!(validate_field(&field));
}

#[test]
fn email_shape_is_enforced() {
    let field = Field::new("email", "Email").kind(FieldKind::Email);

    for good in ["jane@example.com", "a.b+c@mail.example.org"] {
        field.set_value(good);
        assert!(validate_field(&field), "{good} should be valid");
    }

    for bad in ["jane", "jane@", "@example.com", "jane@example", "two words@example.com"] {
        field.set_value(bad);
        assert!(!validate_field(&field), "{bad} should be invalid");
        assert!(field.error().is_some());
    }
}

#[test]
fn empty_optional_email_is_valid() {
    let field = Field::new("email", "Email").kind(FieldKind::Email);
    assert!(validate_field(&field));
}

#[test]
fn phone_numbers_normalize_before_matching() {
    let field = Field::new("phone", "Phone");

    field.set_value("+1234567890");
    assert!(validate_field(&field));

    field.set_value("(555) 123-4567");
    assert!(validate_field(&field), "formatting strips to digits");

    field.set_value("abc");
    assert!(!validate_field(&field));

    field.set_value("0555123456");
    assert!(!validate_field(&field), "leading zero is rejected");
}

#[test]
fn phone_rule_applies_by_field_name() {
    // A plain text field named "phone" gets the phone rule, matching the
    // form markup this models.
    let by_name = Field::new("phone", "Phone").with_value("not a number");
    assert!(!validate_field(&by_name));

    let by_kind = Field::new("emergency_contact", "Emergency contact")
        .kind(FieldKind::Phone)
        .with_value("not a number");
    assert!(!validate_field(&by_kind));
}

#[test]
fn revalidation_clears_stale_errors() {
    let field = required_text("email_field");
    assert!(!validate_field(&field));
    assert!(field.has_error());

    field.set_value("present");
    assert!(validate_field(&field));
    assert!(!field.has_error());
}

#[test]
fn form_validation_checks_every_field() {
    let first = required_text("first_name");
    let email = Field::new("email", "Email").kind(FieldKind::Email).required();
    let phone = Field::new("phone", "Phone").with_value("abc");

    let form = Form::new("profile", "/employees/profile/")
        .field(first.clone())
        .field(email.clone())
        .field(phone.clone());

    let result = validate_form(&form);
    assert!(!result.is_valid());

    // No short-circuit: every failing field carries its error.
    assert_eq!(result.errors().len(), 3);
    assert!(first.has_error());
    assert!(email.has_error());
    assert!(phone.has_error());

    first.set_value("Jane");
    email.set_value("jane@example.com");
    phone.set_value("+15551234567");
    assert!(validate_form(&form).is_valid());
}
