use rust_decimal::Decimal;

pub const SENDER_REQUIRED: &str = "Sender ID is required";
pub const RECEIVER_REQUIRED: &str = "Receiver ID is required";
pub const AMOUNT_POSITIVE: &str = "Amount must be greater than 0";

/// The in-progress, user-editable transaction.
///
/// The amount is kept as the raw input string until the draft is consumed to
/// build a [`TransactionRequest`](crate::domain::transaction::TransactionRequest);
/// parsing happens during validation so the form can round-trip exactly what
/// the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionDraft {
    pub sender_id: String,
    pub receiver_id: String,
    pub amount: String,
}

impl TransactionDraft {
    pub fn new(
        sender_id: impl Into<String>,
        receiver_id: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            sender_id: sender_id.into(),
            receiver_id: receiver_id.into(),
            amount: amount.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SenderId,
    ReceiverId,
    Amount,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::SenderId => "sender_id",
            Field::ReceiverId => "receiver_id",
            Field::Amount => "amount",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Parses a raw amount input into a positive decimal, if it is one.
pub(crate) fn parse_amount(raw: &str) -> Option<Decimal> {
    raw.trim()
        .parse::<Decimal>()
        .ok()
        .filter(|value| *value > Decimal::ZERO)
}

/// Checks all three draft rules independently and reports every violated
/// field together; there is no short-circuit. An empty result means the
/// draft may advance to review.
pub fn validate(draft: &TransactionDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if draft.sender_id.trim().is_empty() {
        errors.push(FieldError {
            field: Field::SenderId,
            message: SENDER_REQUIRED,
        });
    }

    if draft.receiver_id.trim().is_empty() {
        errors.push(FieldError {
            field: Field::ReceiverId,
            message: RECEIVER_REQUIRED,
        });
    }

    // An unparsable amount is reported identically to a non-positive one.
    if parse_amount(&draft.amount).is_none() {
        errors.push(FieldError {
            field: Field::Amount,
            message: AMOUNT_POSITIVE,
        });
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_draft_has_no_errors() {
        let draft = TransactionDraft::new("alice", "bob", "100.00");
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn test_whitespace_ids_are_rejected() {
        let draft = TransactionDraft::new("   ", "bob", "10");
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::SenderId);
        assert_eq!(errors[0].message, SENDER_REQUIRED);
    }

    #[test]
    fn test_all_violations_reported_together() {
        let draft = TransactionDraft::default();
        let errors = validate(&draft);
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::SenderId, Field::ReceiverId, Field::Amount]);
    }

    #[test]
    fn test_amount_rules() {
        for bad in ["", "abc", "0", "-5", "0.00"] {
            let draft = TransactionDraft::new("alice", "bob", bad);
            let errors = validate(&draft);
            assert_eq!(errors.len(), 1, "amount {bad:?} should be rejected");
            assert_eq!(errors[0].message, AMOUNT_POSITIVE);
        }
    }

    #[test]
    fn test_parse_amount_trims_input() {
        assert_eq!(parse_amount(" 75000.00 "), Some(dec!(75000.00)));
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn test_validate_is_idempotent() {
        let draft = TransactionDraft::new("", "bob", "1.0");
        assert_eq!(validate(&draft), validate(&draft));
    }
}
