use crate::domain::draft::FieldError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorkflowError>;

/// Errors produced while driving a payment workflow.
///
/// `Transport` and `MalformedResponse` are propagated identically by the
/// state machine: both send the workflow back to `Details` with the message
/// stored as the workflow-level error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("validation failed: {}", join_messages(.0))]
    Validation(Vec<FieldError>),
    #[error("evaluation service error: {0}")]
    Transport(String),
    #[error("malformed evaluation response: {0}")]
    MalformedResponse(String),
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::draft::{Field, FieldError};

    #[test]
    fn test_validation_display_joins_field_messages() {
        let err = WorkflowError::Validation(vec![
            FieldError {
                field: Field::SenderId,
                message: "Sender ID is required",
            },
            FieldError {
                field: Field::Amount,
                message: "Amount must be greater than 0",
            },
        ]);

        let rendered = err.to_string();
        assert!(rendered.contains("Sender ID is required"));
        assert!(rendered.contains("Amount must be greater than 0"));
    }
}
