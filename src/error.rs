use crate::form::Field;

/// A rule violated by a single form field.
///
/// Variants are listed in the order they are checked; a field only ever
/// reports the first rule it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Value is required")]
    Required,
    #[error("Value has an invalid format")]
    Format,
    #[error("Value must be at least {min}")]
    BelowMinimum { min: u8 },
    #[error("Value must be at most {max}")]
    AboveMaximum { max: u8 },
    #[error("Value must be at least {min} characters long")]
    TooShort { min: usize },
}

impl ValidationError {
    /// The rule family this error belongs to
    pub fn rule(&self) -> Rule {
        match self {
            Self::Required => Rule::Required,
            Self::Format => Rule::Format,
            Self::BelowMinimum { .. } | Self::AboveMaximum { .. } => Rule::Range,
            Self::TooShort { .. } => Rule::Length,
        }
    }
}

/// Rule families a field can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Format,
    Range,
    Length,
}

/// Failure of the outbound registration call
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Failed to send registration: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Registration endpoint responded with {0}")]
    Status(reqwest::StatusCode),
}

/// A validation failure tied to the field that raised it
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Field {field} is invalid: {error}")]
pub struct FieldError {
    pub field: Field,
    pub error: ValidationError,
}

/// Why a call to submit the form did not register anyone
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] FieldError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}
