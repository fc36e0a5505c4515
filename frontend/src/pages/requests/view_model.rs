use crate::api::{ApiClient, ApprovalRequest};
use crate::pages::requests::{
    repository::RequestsRepository,
    utils::{visible_requests, RequestFilterState, RequestListView},
};
use crate::state::list::{load_list, FetchSequencer, ListState};
use leptos::*;

#[derive(Clone, Copy)]
pub struct RequestsViewModel {
    pub view: RequestListView,
    pub state: RwSignal<ListState<ApprovalRequest>>,
    pub filter_state: RequestFilterState,
    repository: StoredValue<RequestsRepository>,
    sequencer: StoredValue<FetchSequencer>,
}

impl RequestsViewModel {
    pub fn new(view: RequestListView) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self {
            view,
            state: create_rw_signal(ListState::Idle),
            filter_state: RequestFilterState::default(),
            repository: store_value(RequestsRepository::new(api)),
            sequencer: store_value(FetchSequencer::new()),
        }
    }

    /// Re-fetches the backing collection; only the newest fetch lands.
    pub fn refresh(&self) {
        let view = self.view;
        let state = self.state;
        let repo = self.repository.get_value();
        let sequencer = self.sequencer.get_value();
        spawn_local(async move {
            load_list(&sequencer, state, view.title(), move || async move {
                repo.fetch(view).await
            })
            .await;
        });
    }

    /// Recomputed from the full collection whenever data or filters change.
    pub fn visible(&self) -> Signal<Vec<ApprovalRequest>> {
        let view = self.view;
        let state = self.state;
        let filter_state = self.filter_state;
        Signal::derive(move || {
            let filter = filter_state.snapshot();
            state.with(|state| visible_requests(view, state.items(), &filter))
        })
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading() || matches!(s, ListState::Idle)))
    }
}
