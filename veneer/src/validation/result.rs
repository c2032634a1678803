/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name (from the form definition).
    pub field: String,
    /// Human-readable message, identical to the field's inline error.
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of validating a whole form.
#[derive(Debug, Clone, Default)]
pub enum ValidationResult {
    /// All fields passed.
    #[default]
    Valid,
    /// One or more fields failed.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// The first failing field, if any (useful for focusing).
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }
}
