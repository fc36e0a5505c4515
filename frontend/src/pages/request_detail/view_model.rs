use crate::api::ApiClient;
use crate::pages::request_detail::{
    lifecycle::{can_act, load_detail, run_decision, Decision, DetailState, RequestLifecycle},
    repository::RequestDetailRepository,
};
use crate::state::{
    auth::{use_auth, AuthState},
    list::FetchSequencer,
    message::MessageState,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct RequestDetailViewModel {
    pub state: RwSignal<DetailState>,
    pub comment: RwSignal<String>,
    pub message: RwSignal<MessageState>,
    pub pending_decision: RwSignal<Option<Decision>>,
    auth: ReadSignal<AuthState>,
    lifecycle: StoredValue<RequestLifecycle>,
    sequencer: StoredValue<FetchSequencer>,
}

impl RequestDetailViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let (auth, _) = use_auth();
        Self {
            state: create_rw_signal(DetailState::Loading),
            comment: create_rw_signal(String::new()),
            message: create_rw_signal(MessageState::default()),
            pending_decision: create_rw_signal(None),
            auth,
            lifecycle: store_value(RequestLifecycle::new(RequestDetailRepository::new(api))),
            sequencer: store_value(FetchSequencer::new()),
        }
    }

    pub fn load(&self, id: String) {
        let state = self.state;
        let lifecycle = self.lifecycle.get_value();
        let sequencer = self.sequencer.get_value();
        spawn_local(async move {
            load_detail(&lifecycle, &sequencer, state, &id).await;
        });
    }

    /// Whether the signed-in user sees the approve and reject controls.
    pub fn can_act(&self) -> Signal<bool> {
        let auth = self.auth;
        let state = self.state;
        Signal::derive(move || {
            let user = auth.with(|auth| auth.user.clone());
            state.with(|state| {
                state
                    .request()
                    .map(|request| can_act(user.as_ref(), request))
                    .unwrap_or(false)
            })
        })
    }

    pub fn decide(&self, decision: Decision) {
        if self.pending_decision.get_untracked().is_some() {
            return;
        }
        let user = self.auth.get_untracked().user;
        let comment = self.comment.get_untracked();
        let state = self.state;
        let message = self.message;
        let pending = self.pending_decision;
        let comment_signal = self.comment;
        let lifecycle = self.lifecycle.get_value();
        let sequencer = self.sequencer.get_value();

        message.update(MessageState::clear);
        pending.set(Some(decision));
        spawn_local(async move {
            let applied = run_decision(
                &lifecycle, &sequencer, state, message, user, decision, comment,
            )
            .await;
            if applied {
                comment_signal.set(String::new());
            }
            pending.set(None);
        });
    }
}
