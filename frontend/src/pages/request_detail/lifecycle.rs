use crate::{
    api::{ApiError, ApprovalRequest, RequestStatus, User},
    state::{inflight::InFlightRegistry, list::FetchSequencer, message::MessageState},
};
use leptos::*;

use super::repository::RequestDetailRepository;

/// The only transitions a user can ask for. `Pending` is never a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn target_status(self) -> RequestStatus {
        match self {
            Decision::Approve => RequestStatus::Approved,
            Decision::Reject => RequestStatus::Rejected,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Decision::Approve => "Aprobar",
            Decision::Reject => "Rechazar",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Decision::Approve => "Solicitud aprobada",
            Decision::Reject => "Solicitud rechazada",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransitionError {
    #[error("Ya hay una acción en curso para esta solicitud")]
    InFlight,
    #[error("No puedes aprobar ni rechazar esta solicitud")]
    NotAllowed,
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<TransitionError> for ApiError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::Api(err) => err,
            other => ApiError::validation(other.to_string()),
        }
    }
}

/// Pending, and the user is one of the designated approvers.
pub fn can_act(user: Option<&User>, request: &ApprovalRequest) -> bool {
    user.map(|user| request.status == RequestStatus::Pending && request.is_approver(user.id))
        .unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(ApprovalRequest),
    Failed(ApiError),
}

impl DetailState {
    pub fn from_result(result: Result<ApprovalRequest, ApiError>) -> Self {
        match result {
            Ok(request) => DetailState::Loaded(request),
            Err(err) => DetailState::Failed(err),
        }
    }

    pub fn request(&self) -> Option<&ApprovalRequest> {
        match self {
            DetailState::Loaded(request) => Some(request),
            _ => None,
        }
    }
}

/// Fetches a request and drives its status transitions, one at a time per request.
#[derive(Clone)]
pub struct RequestLifecycle {
    repository: RequestDetailRepository,
    in_flight: InFlightRegistry,
}

impl RequestLifecycle {
    pub fn new(repository: RequestDetailRepository) -> Self {
        Self {
            repository,
            in_flight: InFlightRegistry::new(),
        }
    }

    pub fn is_in_flight(&self, id: &str) -> bool {
        self.in_flight.is_in_flight(id)
    }

    pub async fn load(&self, id: &str) -> Result<ApprovalRequest, ApiError> {
        self.repository.fetch(id).await
    }

    /// Sends the transition, then returns the record as the server now has it.
    /// The guard is taken before the first await, so a concurrent call for the
    /// same request fails with `InFlight` without touching the network.
    pub async fn act(
        &self,
        request: &ApprovalRequest,
        user: Option<&User>,
        decision: Decision,
        comment: &str,
    ) -> Result<ApprovalRequest, TransitionError> {
        let _guard = self
            .in_flight
            .try_acquire(&request.id)
            .ok_or(TransitionError::InFlight)?;
        if !can_act(user, request) {
            return Err(TransitionError::NotAllowed);
        }
        self.repository
            .transition(&request.id, decision.target_status(), comment.trim())
            .await?;
        Ok(self.repository.fetch(&request.id).await?)
    }
}

pub async fn load_detail(
    lifecycle: &RequestLifecycle,
    sequencer: &FetchSequencer,
    state: RwSignal<DetailState>,
    id: &str,
) {
    let ticket = sequencer.next();
    state.set(DetailState::Loading);
    let result = lifecycle.load(id).await;
    if let Err(err) = &result {
        log::error!("failed to load request {}: {}", id, err);
    }
    sequencer.apply_if_current(ticket, || state.set(DetailState::from_result(result)));
}

/// Applies a decision to the displayed record. On failure the last
/// known-good record stays on screen and the error goes to `message`.
/// The re-fetched record is dropped if a newer load started meanwhile.
pub async fn run_decision(
    lifecycle: &RequestLifecycle,
    sequencer: &FetchSequencer,
    state: RwSignal<DetailState>,
    message: RwSignal<MessageState>,
    user: Option<User>,
    decision: Decision,
    comment: String,
) -> bool {
    let Some(request) = state.with_untracked(|s| s.request().cloned()) else {
        return false;
    };
    let ticket = sequencer.next();
    match lifecycle.act(&request, user.as_ref(), decision, &comment).await {
        Ok(updated) => {
            let shown =
                sequencer.apply_if_current(ticket, || state.set(DetailState::Loaded(updated)));
            if shown {
                message.update(|msg| msg.set_success(decision.success_message()));
            }
            true
        }
        Err(TransitionError::InFlight) => {
            log::warn!("ignored duplicate {:?} on request {}", decision, request.id);
            false
        }
        Err(err) => {
            log::error!("transition of request {} failed: {}", request.id, err);
            message.update(|msg| msg.set_error(err.into()));
            false
        }
    }
}
