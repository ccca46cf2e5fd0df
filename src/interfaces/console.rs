use crate::domain::decision::RiskDecision;
use crate::domain::draft::{FieldError, TransactionDraft};
use crate::domain::payment::{PaymentResult, PaymentStatus};
use crate::interfaces::presenter::{self, Presentation};
use std::fmt::Write;

/// Plain-text outcome views for the CLI.
///
/// Every view that shows a decision goes through the presenter; nothing here
/// matches on raw decision values.

pub fn render_validation_errors(errors: &[FieldError]) -> String {
    let mut out = String::new();
    for error in errors {
        let _ = writeln!(out, "{}: {}", error.field, error.message);
    }
    out
}

pub fn render_review(draft: &TransactionDraft) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Review transaction");
    let _ = writeln!(out, "  From:   {}", draft.sender_id.trim());
    let _ = writeln!(out, "  To:     {}", draft.receiver_id.trim());
    let _ = writeln!(out, "  Amount: ${}", draft.amount.trim());
    out
}

/// Renders the terminal step. The result's status selects the success or
/// blocked view; both consult the presenter for the decision descriptor.
pub fn render_result(result: &PaymentResult) -> String {
    match result.status {
        PaymentStatus::Success => render_success(result),
        PaymentStatus::Blocked | PaymentStatus::Unknown => render_blocked(result),
    }
}

fn render_success(result: &PaymentResult) -> String {
    let style = presenter::decision_style(result.decision);
    let mut out = String::new();
    let _ = writeln!(out, "{} Payment successful", style.icon);
    let _ = writeln!(out, "  Amount:       ${:.2}", result.amount);
    let _ = writeln!(out, "  From:         {}", result.sender_id);
    let _ = writeln!(out, "  To:           {}", result.receiver_id);
    let _ = writeln!(out, "  Payment ID:   {}", result.payment_id);
    let _ = writeln!(out, "  Processed at: {}", result.processed_at);
    let _ = writeln!(
        out,
        "  Decision:     {} (risk score {}/100)",
        style.label, result.risk_score
    );
    let _ = writeln!(out, "  {}", result.message);
    out
}

fn render_blocked(result: &PaymentResult) -> String {
    let style = presenter::decision_style(result.decision);
    let mut out = String::new();
    let _ = writeln!(out, "{} Payment blocked", style.icon);
    let _ = writeln!(out, "  Attempted:  ${:.2}", result.amount);
    let _ = writeln!(out, "  From:       {}", result.sender_id);
    let _ = writeln!(out, "  To:         {}", result.receiver_id);
    let _ = writeln!(
        out,
        "  Decision:   {} (risk score {}/100)",
        style.label, result.risk_score
    );
    let _ = writeln!(out, "  {}", result.message);
    let flags = result.flags();
    if !flags.is_empty() {
        let _ = writeln!(out, "  Risk indicators ({}):", flags.len());
        for flag in flags {
            let _ = writeln!(out, "    ! {flag}");
        }
    }
    out
}

/// Renders a stand-alone risk assessment from the evaluate endpoint.
pub fn render_evaluation(decision: &RiskDecision) -> String {
    let Presentation {
        decision: style,
        badge,
    } = presenter::present(decision.decision, decision.risk_level);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} [{}]  risk score {}/100",
        style.icon, style.label, badge.label, decision.risk_score
    );
    let _ = writeln!(out, "  {}", decision.reason);
    for flag in &decision.flags {
        let _ = writeln!(out, "  - {flag}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::{Decision, RiskLevel};
    use crate::domain::draft::{self, Field};
    use rust_decimal_macros::dec;

    fn blocked_result() -> PaymentResult {
        PaymentResult {
            payment_id: "p1".into(),
            status: PaymentStatus::Blocked,
            transaction_id: "t1".into(),
            sender_id: "user123".into(),
            receiver_id: "flagged_account_1".into(),
            amount: dec!(75000),
            risk_score: 88,
            decision: Decision::Block,
            processed_at: "2026-02-15T10:30:45Z".into(),
            message: "Payment rejected: high risk".into(),
            flags: Some(vec!["large_amount".into(), "flagged_recipient".into()]),
        }
    }

    #[test]
    fn test_blocked_view_uses_presenter_label_and_lists_flags() {
        let view = render_result(&blocked_result());
        assert!(view.contains("BLOCKED"));
        assert!(view.contains("$75000.00"));
        assert!(view.contains("! large_amount"));
        assert!(view.contains("! flagged_recipient"));
    }

    #[test]
    fn test_success_view_shows_payment_id() {
        let mut result = blocked_result();
        result.status = PaymentStatus::Success;
        result.decision = Decision::Approve;
        result.flags = None;
        let view = render_result(&result);
        assert!(view.contains("Payment successful"));
        assert!(view.contains("APPROVED"));
        assert!(view.contains("Payment ID:   p1"));
    }

    #[test]
    fn test_evaluation_view_combines_style_and_badge() {
        let decision = RiskDecision {
            decision: Decision::Warn,
            reason: "Unusual amount".into(),
            risk_score: 55,
            risk_level: RiskLevel::Medium,
            flags: vec!["amount_outlier".into()],
        };
        let view = render_evaluation(&decision);
        assert!(view.contains("WARNING"));
        assert!(view.contains("Medium Risk"));
        assert!(view.contains("55/100"));
        assert!(view.contains("amount_outlier"));
    }

    #[test]
    fn test_validation_errors_render_one_per_line() {
        let errors = vec![
            FieldError {
                field: Field::SenderId,
                message: draft::SENDER_REQUIRED,
            },
            FieldError {
                field: Field::Amount,
                message: draft::AMOUNT_POSITIVE,
            },
        ];
        let view = render_validation_errors(&errors);
        assert_eq!(view.lines().count(), 2);
        assert!(view.contains("Sender ID is required"));
    }
}
