use crate::domain::decision::Decision;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
    Blocked,
    #[serde(other)]
    Unknown,
}

/// Terminal artifact of a completed workflow, deserialized from the
/// process-payment response. `flags` may be absent or null on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResult {
    pub payment_id: String,
    pub status: PaymentStatus,
    pub transaction_id: String,
    pub sender_id: String,
    pub receiver_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub risk_score: u8,
    pub decision: Decision,
    pub processed_at: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<Vec<String>>,
}

impl PaymentResult {
    /// Flags attached by the risk engine, empty when none were reported.
    pub fn flags(&self) -> &[String] {
        self.flags.as_deref().unwrap_or_default()
    }
}

/// Liveness probe response from `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}
