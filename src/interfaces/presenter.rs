use crate::domain::decision::{Decision, RiskLevel};

/// Presentation descriptor for a decision: one severity tier per verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionStyle {
    pub label: &'static str,
    pub severity_class: &'static str,
    pub icon: &'static str,
}

/// Badge descriptor for a risk level, independent of the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskBadge {
    pub label: &'static str,
    pub severity_class: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub decision: DecisionStyle,
    pub badge: RiskBadge,
}

/// Maps every decision to exactly one style. Total: values outside the
/// closed vocabulary arrive as [`Decision::Unknown`] and get the designated
/// unknown descriptor instead of failing.
pub fn decision_style(decision: Decision) -> DecisionStyle {
    match decision {
        Decision::Approve => DecisionStyle {
            label: "APPROVED",
            severity_class: "ok",
            icon: "✓",
        },
        Decision::Warn => DecisionStyle {
            label: "WARNING",
            severity_class: "warn",
            icon: "⚠",
        },
        Decision::Block => DecisionStyle {
            label: "BLOCKED",
            severity_class: "critical",
            icon: "✕",
        },
        Decision::Unknown => DecisionStyle {
            label: "UNKNOWN",
            severity_class: "unknown",
            icon: "?",
        },
    }
}

/// Maps every risk level to exactly one badge.
pub fn risk_badge(level: RiskLevel) -> RiskBadge {
    match level {
        RiskLevel::Low => RiskBadge {
            label: "Low Risk",
            severity_class: "ok",
        },
        RiskLevel::Medium => RiskBadge {
            label: "Medium Risk",
            severity_class: "warn",
        },
        RiskLevel::High => RiskBadge {
            label: "High Risk",
            severity_class: "critical",
        },
        RiskLevel::Unknown => RiskBadge {
            label: "Unknown Risk",
            severity_class: "unknown",
        },
    }
}

/// The single source of truth for rendering a `(decision, risk level)` pair.
/// Every outcome view goes through here so they can never disagree on what a
/// given pair means.
pub fn present(decision: Decision, level: RiskLevel) -> Presentation {
    Presentation {
        decision: decision_style(decision),
        badge: risk_badge(level),
    }
}
