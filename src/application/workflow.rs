use crate::domain::draft::{self, TransactionDraft};
use crate::domain::payment::PaymentResult;
use crate::domain::ports::RiskServiceBox;
use crate::domain::transaction::TransactionRequest;
use crate::error::{Result, WorkflowError};

/// The four ordered steps of a workflow instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Details,
    Review,
    Processing,
    Result,
}

impl Step {
    /// 1-based position, matching the progress indicator of the flow.
    pub fn index(self) -> u8 {
        match self {
            Step::Details => 1,
            Step::Review => 2,
            Step::Processing => 3,
            Step::Result => 4,
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Step::Details => "details",
            Step::Review => "review",
            Step::Processing => "processing",
            Step::Result => "result",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowEvent {
    SubmitDetails(TransactionDraft),
    EditDetails,
    ConfirmReview,
    EvaluationSucceeded(PaymentResult),
    EvaluationFailed(String),
    Reset,
}

impl WorkflowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowEvent::SubmitDetails(_) => "submit_details",
            WorkflowEvent::EditDetails => "edit_details",
            WorkflowEvent::ConfirmReview => "confirm_review",
            WorkflowEvent::EvaluationSucceeded(_) => "evaluation_succeeded",
            WorkflowEvent::EvaluationFailed(_) => "evaluation_failed",
            WorkflowEvent::Reset => "reset",
        }
    }
}

/// Everything one workflow instance owns: the current step, the draft, the
/// terminal result and the workflow-level error message. At most one draft
/// and one result are alive at a time; `step == Result` holds exactly when
/// `result` is populated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowState {
    pub step: Step,
    pub draft: TransactionDraft,
    pub result: Option<PaymentResult>,
    pub error: Option<String>,
}

/// Applies one event to the state machine. Pure and total: events that are
/// not legal in the current step return the state unchanged, which is what
/// makes re-submission impossible while an evaluation is in flight.
pub fn transition(state: WorkflowState, event: WorkflowEvent) -> WorkflowState {
    match (state.step, event) {
        (Step::Details, WorkflowEvent::SubmitDetails(draft)) => {
            if draft::validate(&draft).is_empty() {
                // A passing submission also clears the error from any
                // previous failed attempt.
                WorkflowState {
                    step: Step::Review,
                    draft,
                    error: None,
                    ..state
                }
            } else {
                // Keep the rejected input so the form stays populated.
                WorkflowState { draft, ..state }
            }
        }
        (Step::Review, WorkflowEvent::EditDetails) => WorkflowState {
            step: Step::Details,
            ..state
        },
        (Step::Review, WorkflowEvent::ConfirmReview) => WorkflowState {
            step: Step::Processing,
            ..state
        },
        (Step::Processing, WorkflowEvent::EvaluationSucceeded(result)) => WorkflowState {
            step: Step::Result,
            result: Some(result),
            ..state
        },
        (Step::Processing, WorkflowEvent::EvaluationFailed(message)) => WorkflowState {
            step: Step::Details,
            result: None,
            error: Some(message),
            ..state
        },
        (Step::Result, WorkflowEvent::Reset) => WorkflowState::default(),
        (_, _) => state,
    }
}

/// Hook invoked after every applied event, including ignored ones.
pub trait WorkflowObserver: Send + Sync {
    fn on_transition(&self, from: Step, event: &'static str, state: &WorkflowState);
}

pub type ObserverBox = Box<dyn WorkflowObserver>;

/// Default observer: structured transition logging through `tracing`.
pub struct TracingObserver;

impl WorkflowObserver for TracingObserver {
    fn on_transition(&self, from: Step, event: &'static str, state: &WorkflowState) {
        tracing::debug!(
            from = %from,
            to = %state.step,
            event,
            has_result = state.result.is_some(),
            "workflow transition"
        );
    }
}

/// Drives one workflow instance against a risk service.
///
/// The driver owns the state exclusively; `confirm` is the only path into
/// `Processing`, and it holds `&mut self` across the await, so no second
/// evaluation can be started while one is outstanding.
pub struct Workflow {
    state: WorkflowState,
    service: RiskServiceBox,
    observer: ObserverBox,
}

impl Workflow {
    pub fn new(service: RiskServiceBox) -> Self {
        Self::with_observer(service, Box::new(TracingObserver))
    }

    pub fn with_observer(service: RiskServiceBox, observer: ObserverBox) -> Self {
        Self {
            state: WorkflowState::default(),
            service,
            observer,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    fn apply(&mut self, event: WorkflowEvent) {
        let from = self.state.step;
        let name = event.name();
        self.state = transition(std::mem::take(&mut self.state), event);
        self.observer.on_transition(from, name, &self.state);
    }

    /// `Details -> Review`, guarded by validation. On failure the draft is
    /// kept in the state and the full set of field errors is returned.
    pub fn submit_details(&mut self, draft: TransactionDraft) -> Result<()> {
        let errors = draft::validate(&draft);
        self.apply(WorkflowEvent::SubmitDetails(draft));
        if errors.is_empty() {
            Ok(())
        } else {
            Err(WorkflowError::Validation(errors))
        }
    }

    /// `Review -> Details`, draft retained unchanged.
    pub fn edit_details(&mut self) {
        self.apply(WorkflowEvent::EditDetails);
    }

    /// `Review -> Processing -> Result | Details`.
    ///
    /// Builds the request from the stored draft (timestamp at build time),
    /// makes the single evaluation attempt and applies the outcome event.
    /// Any failure returns the workflow to `Details` with the message stored
    /// as the workflow-level error; nothing is swallowed.
    pub async fn confirm(&mut self) -> Result<()> {
        if self.state.step != Step::Review {
            return Ok(());
        }
        self.apply(WorkflowEvent::ConfirmReview);

        let request = match TransactionRequest::from_draft(&self.state.draft) {
            Ok(request) => request,
            Err(err) => {
                self.apply(WorkflowEvent::EvaluationFailed(err.to_string()));
                return Err(err);
            }
        };

        match self.service.process(&request).await {
            Ok(result) => {
                self.apply(WorkflowEvent::EvaluationSucceeded(result));
                Ok(())
            }
            Err(err) => {
                self.apply(WorkflowEvent::EvaluationFailed(err.to_string()));
                Err(err)
            }
        }
    }

    /// `Result -> Details`, clearing draft, result and error.
    pub fn reset(&mut self) {
        self.apply(WorkflowEvent::Reset);
    }
}
