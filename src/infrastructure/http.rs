use crate::domain::decision::RiskDecision;
use crate::domain::payment::{HealthStatus, PaymentResult};
use crate::domain::ports::RiskService;
use crate::domain::transaction::TransactionRequest;
use crate::error::{Result, WorkflowError};
use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// HTTP adapter for the risk evaluation service.
///
/// A pure translation layer: one attempt per call, no retry, responses passed
/// through verbatim. Non-2xx responses become [`WorkflowError::Transport`]
/// with the message taken from the `{"detail": ...}` error body when present;
/// bodies that do not match the expected shape become
/// [`WorkflowError::MalformedResponse`].
pub struct RiskApiClient {
    http: HttpClient,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[derive(Deserialize)]
struct FlaggedAccountsBody {
    #[serde(default)]
    flagged_accounts: Vec<String>,
}

impl RiskApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.into(),
        }
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &TransactionRequest,
    ) -> Result<T> {
        debug!(method = "POST", path, "calling evaluation service");
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(|e| WorkflowError::Transport(format!("request to {path} failed: {e}")))?;
        Self::decode(path, response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(method = "GET", path, "calling evaluation service");
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .map_err(|e| WorkflowError::Transport(format!("request to {path} failed: {e}")))?;
        Self::decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WorkflowError::Transport(format!("failed to read {path} response: {e}")))?;

        if !status.is_success() {
            warn!(path, status = status.as_u16(), "evaluation service returned an error");
            return Err(WorkflowError::Transport(error_detail(status, &body)));
        }

        serde_json::from_str(&body)
            .map_err(|e| WorkflowError::MalformedResponse(format!("{path}: {e}")))
    }
}

/// Extracts the human-readable message from an error body, falling back to a
/// generic status message when the body carries no `detail`.
fn error_detail(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { detail: Some(detail) }) if !detail.is_empty() => detail,
        _ => format!("service returned {status}"),
    }
}

#[async_trait]
impl RiskService for RiskApiClient {
    async fn evaluate(&self, request: &TransactionRequest) -> Result<RiskDecision> {
        self.post_json("/api/evaluate-transaction", request).await
    }

    async fn process(&self, request: &TransactionRequest) -> Result<PaymentResult> {
        self.post_json("/api/process-payment", request).await
    }

    async fn flagged_accounts(&self) -> Result<Vec<String>> {
        let body: FlaggedAccountsBody = self.get_json("/api/flagged-accounts").await?;
        Ok(body.flagged_accounts)
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.get_json("/health").await
    }
}
