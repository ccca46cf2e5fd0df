use crate::domain::decision::{Decision, RiskDecision};
use crate::domain::payment::{HealthStatus, PaymentResult, PaymentStatus};
use crate::domain::ports::RiskService;
use crate::domain::transaction::TransactionRequest;
use crate::error::{Result, WorkflowError};
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

/// In-process risk service backed by a scripted queue of outcomes.
///
/// Each `evaluate`/`process` call consumes the next scripted item. Payment
/// settlement mirrors the remote service: a `block` decision yields a blocked
/// result with a "Payment rejected" message, anything else settles
/// successfully with the decision, score and flags carried over verbatim.
#[derive(Default)]
pub struct InMemoryRiskService {
    script: Mutex<VecDeque<Result<RiskDecision>>>,
    flagged: Vec<String>,
    sequence: AtomicU64,
}

impl InMemoryRiskService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flagged_accounts(mut self, accounts: Vec<String>) -> Self {
        self.flagged = accounts;
        self
    }

    /// Queues a decision for the next evaluation.
    pub async fn script_decision(&self, decision: RiskDecision) {
        self.script.lock().await.push_back(Ok(decision));
    }

    /// Queues a failure for the next evaluation.
    pub async fn script_failure(&self, err: WorkflowError) {
        self.script.lock().await.push_back(Err(err));
    }

    async fn next_decision(&self) -> Result<RiskDecision> {
        self.script.lock().await.pop_front().unwrap_or_else(|| {
            Err(WorkflowError::Transport(
                "no scripted decision queued".to_string(),
            ))
        })
    }

    fn settle(&self, request: &TransactionRequest, decision: RiskDecision) -> PaymentResult {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let blocked = decision.decision == Decision::Block;
        PaymentResult {
            payment_id: format!("pay_{seq:08}"),
            status: if blocked {
                PaymentStatus::Blocked
            } else {
                PaymentStatus::Success
            },
            transaction_id: format!("txn_{seq:08}"),
            sender_id: request.sender_id.clone(),
            receiver_id: request.receiver_id.clone(),
            amount: request.amount,
            risk_score: decision.risk_score,
            decision: decision.decision,
            processed_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            message: if blocked {
                format!("Payment rejected: {}", decision.reason)
            } else {
                "Payment processed successfully".to_string()
            },
            flags: if decision.flags.is_empty() && !blocked {
                None
            } else {
                Some(decision.flags)
            },
        }
    }
}

#[async_trait]
impl RiskService for InMemoryRiskService {
    async fn evaluate(&self, _request: &TransactionRequest) -> Result<RiskDecision> {
        self.next_decision().await
    }

    async fn process(&self, request: &TransactionRequest) -> Result<PaymentResult> {
        let decision = self.next_decision().await?;
        Ok(self.settle(request, decision))
    }

    async fn flagged_accounts(&self) -> Result<Vec<String>> {
        Ok(self.flagged.clone())
    }

    async fn health(&self) -> Result<HealthStatus> {
        Ok(HealthStatus {
            status: "healthy".to_string(),
        })
    }
}
