//! Field and form validation.
//!
//! Validation errors are local and recoverable: rules set or clear a single
//! inline error message on the field and are never returned as `Err`.
//!
//! # Example
//!
//! ```ignore
//! use veneer::form::{Field, FieldKind, Form};
//! use veneer::validation::{validate_field, validate_form};
//!
//! let email = Field::new("email", "Work email")
//!     .kind(FieldKind::Email)
//!     .required();
//! let form = Form::new("profile", "/employees/profile/").field(email.clone());
//!
//! email.set_value("jane@example.com");
//! assert!(validate_field(&email));
//! assert!(validate_form(&form).is_valid());
//! ```

mod result;
mod rules;

pub use result::{FieldError, ValidationResult};
pub use rules::{validate_field, validate_form};
