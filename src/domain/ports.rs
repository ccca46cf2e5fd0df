use crate::domain::decision::RiskDecision;
use crate::domain::payment::{HealthStatus, PaymentResult};
use crate::domain::transaction::TransactionRequest;
use crate::error::Result;
use async_trait::async_trait;

/// Port to the remote risk-evaluation service.
///
/// Implementations are pure translation layers: they never reinterpret or
/// re-score, and they make exactly one attempt per call.
#[async_trait]
pub trait RiskService: Send + Sync {
    /// `POST /api/evaluate-transaction` — risk assessment only.
    async fn evaluate(&self, request: &TransactionRequest) -> Result<RiskDecision>;

    /// `POST /api/process-payment` — evaluate and settle in one call.
    async fn process(&self, request: &TransactionRequest) -> Result<PaymentResult>;

    /// Auxiliary lookup; not on the workflow's critical path.
    async fn flagged_accounts(&self) -> Result<Vec<String>>;

    /// `GET /health` liveness probe.
    async fn health(&self) -> Result<HealthStatus>;
}

pub type RiskServiceBox = Box<dyn RiskService>;
