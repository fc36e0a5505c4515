use crate::api::{ApiClient, HistoryEntry};
use crate::pages::admin_history::repository::HistoryRepository;
use crate::state::list::{load_list, FetchSequencer, ListFilter, ListState};
use leptos::*;

/// The form edits `draft`; only "Filtrar" copies it into `applied`.
#[derive(Clone, Copy)]
pub struct AdminHistoryViewModel {
    pub state: RwSignal<ListState<HistoryEntry>>,
    pub draft: RwSignal<ListFilter>,
    pub applied: RwSignal<ListFilter>,
    repository: StoredValue<HistoryRepository>,
    sequencer: StoredValue<FetchSequencer>,
}

impl AdminHistoryViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self {
            state: create_rw_signal(ListState::Idle),
            draft: create_rw_signal(ListFilter::default()),
            applied: create_rw_signal(ListFilter::default()),
            repository: store_value(HistoryRepository::new(api)),
            sequencer: store_value(FetchSequencer::new()),
        }
    }

    pub fn refresh(&self) {
        let state = self.state;
        let repo = self.repository.get_value();
        let sequencer = self.sequencer.get_value();
        spawn_local(async move {
            load_list(&sequencer, state, "global history", move || async move {
                repo.fetch().await
            })
            .await;
        });
    }

    pub fn apply_filter(&self) {
        self.applied.set(self.draft.get_untracked());
    }

    pub fn clear_filter(&self) {
        self.draft.set(ListFilter::default());
        self.applied.set(ListFilter::default());
    }

    pub fn visible(&self) -> Signal<Vec<HistoryEntry>> {
        let state = self.state;
        let applied = self.applied;
        Signal::derive(move || {
            let filter = applied.get();
            state.with(|state| filter.apply(state.items()))
        })
    }
}

impl Default for AdminHistoryViewModel {
    fn default() -> Self {
        Self::new()
    }
}
