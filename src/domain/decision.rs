use serde::{Deserialize, Serialize};

/// The risk engine's categorical verdict.
///
/// `Unknown` absorbs any value outside the closed set so that a newer service
/// vocabulary degrades to a designated descriptor instead of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approve,
    Warn,
    Block,
    #[serde(other)]
    Unknown,
}

/// The risk engine's severity band, distinct from the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

/// Result of evaluating a transaction, passed through from the remote
/// service verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskDecision {
    pub decision: Decision,
    pub reason: String,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub flags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_full_decision() {
        let json = r#"{
            "decision": "block",
            "reason": "High-value transaction to flagged account",
            "risk_score": 90,
            "risk_level": "high",
            "flags": ["High transaction amount (>$50,000)", "Receiver account flagged in database"]
        }"#;

        let decision: RiskDecision = serde_json::from_str(json).unwrap();
        assert_eq!(decision.decision, Decision::Block);
        assert_eq!(decision.risk_score, 90);
        assert_eq!(decision.risk_level, RiskLevel::High);
        assert_eq!(decision.flags.len(), 2);
    }

    #[test]
    fn test_unknown_vocabulary_fails_open() {
        let json = r#"{
            "decision": "escalate",
            "reason": "new verdict tier",
            "risk_score": 50,
            "risk_level": "extreme"
        }"#;

        let decision: RiskDecision = serde_json::from_str(json).unwrap();
        assert_eq!(decision.decision, Decision::Unknown);
        assert_eq!(decision.risk_level, RiskLevel::Unknown);
        assert!(decision.flags.is_empty());
    }

    #[test]
    fn test_missing_fields_fail_closed() {
        let json = r#"{"decision": "approve"}"#;
        assert!(serde_json::from_str::<RiskDecision>(json).is_err());
    }
}
