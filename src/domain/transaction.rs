use crate::domain::draft::{self, Field, FieldError, TransactionDraft};
use crate::error::{Result, WorkflowError};
use chrono::{SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The immutable request sent to the evaluation service, built from a
/// validated draft at confirmation time.
///
/// The timestamp is generated when the request is built, not when the draft
/// was filled in. Amounts travel as plain JSON numbers on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub sender_id: String,
    pub receiver_id: String,
    pub timestamp: String,
}

impl TransactionRequest {
    /// Consumes a draft (read-only) into a request.
    ///
    /// Fails closed with the full set of field errors if the draft does not
    /// validate; callers never reach the service with a bad draft.
    pub fn from_draft(draft: &TransactionDraft) -> Result<Self> {
        let errors = draft::validate(draft);
        if !errors.is_empty() {
            return Err(WorkflowError::Validation(errors));
        }
        let amount = draft::parse_amount(&draft.amount).ok_or_else(|| {
            WorkflowError::Validation(vec![FieldError {
                field: Field::Amount,
                message: draft::AMOUNT_POSITIVE,
            }])
        })?;

        Ok(Self {
            amount,
            sender_id: draft.sender_id.trim().to_string(),
            receiver_id: draft.receiver_id.trim().to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}
