//! Crate error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced before a simulation starts.
///
/// Policies themselves are total over validated input, so nothing here
/// can occur mid-run.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SchedError {
    /// The process set or policy parameters failed validation.
    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    /// The policy selector did not name a known policy.
    #[error("unknown scheduling policy: {0}")]
    UnknownPolicy(String),
}

impl SchedError {
    /// Validation errors carried by `InvalidInput`, empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            SchedError::InvalidInput(errors) => errors,
            SchedError::UnknownPolicy(_) => &[],
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_joins_messages() {
        let err = SchedError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::NegativeArrival, "P1 arrives at -1"),
            ValidationError::new(ValidationErrorKind::NonPositiveBurst, "P2 has burst 0"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid input: P1 arrives at -1; P2 has burst 0"
        );
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_unknown_policy_display() {
        let err = SchedError::UnknownPolicy("lottery".into());
        assert_eq!(err.to_string(), "unknown scheduling policy: lottery");
        assert!(err.validation_errors().is_empty());
    }
}
