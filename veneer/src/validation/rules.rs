//! The built-in validation rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::form::{Field, FieldKind, Form};

use super::result::{FieldError, ValidationResult};

const REQUIRED_MESSAGE: &str = "This field is required";
const EMAIL_MESSAGE: &str = "Please enter a valid email address";
const PHONE_MESSAGE: &str = "Please enter a valid phone number";

/// Optional leading "+", then 1-16 digits with a non-zero first digit.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern is valid"));

/// Validate a single field, setting or clearing its inline error.
///
/// Rules, in order:
/// - a required field must not be empty (after trimming);
/// - an email field with a value must have a `local@domain.tld` shape;
/// - a phone field (or a field named "phone") with a value must normalize
///   to an international number (spaces, dashes and parentheses stripped).
///
/// A present error is always replaced or cleared, so revalidation reflects
/// the current value only.
pub fn validate_field(field: &Field) -> bool {
    let value = field.value();
    let trimmed = value.trim();

    if field.is_required() && trimmed.is_empty() {
        field.set_error(REQUIRED_MESSAGE);
        return false;
    }

    if !trimmed.is_empty() {
        if field.field_kind() == FieldKind::Email && !email_ok(trimmed) {
            field.set_error(EMAIL_MESSAGE);
            return false;
        }

        let phone_like = field.field_kind() == FieldKind::Phone || field.name() == "phone";
        if phone_like && !phone_ok(trimmed) {
            field.set_error(PHONE_MESSAGE);
            return false;
        }
    }

    field.clear_error();
    true
}

/// Validate every field of a form.
///
/// Deliberately does not short-circuit: each field is validated so each
/// error displays. The form is valid only if all fields are.
pub fn validate_form(form: &Form) -> ValidationResult {
    let mut errors = Vec::new();

    for field in form.fields() {
        if !validate_field(&field) {
            errors.push(FieldError {
                field: field.name().to_string(),
                message: field.error().unwrap_or_default(),
            });
        }
    }

    if errors.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(errors)
    }
}

/// RFC-valid address with a dotted domain (`local@domain.tld`).
fn email_ok(value: &str) -> bool {
    match value.rsplit_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && email_address::EmailAddress::is_valid(value)
        }
        None => false,
    }
}

/// Check a phone number after stripping the usual formatting characters.
fn phone_ok(value: &str) -> bool {
    let normalized: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    PHONE_RE.is_match(&normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_dotted_domain() {
        assert!(email_ok("jane@example.com"));
        assert!(!email_ok("jane@example"));
        assert!(!email_ok("@example.com"));
        assert!(!email_ok("jane.example.com"));
    }

    #[test]
    fn phone_normalizes_formatting() {
        assert!(phone_ok("+1234567890"));
        assert!(phone_ok("(555) 123-4567"));
        assert!(!phone_ok("abc"));
        assert!(!phone_ok("0123456"));
        assert!(!phone_ok("+12345678901234567"));
    }
}
