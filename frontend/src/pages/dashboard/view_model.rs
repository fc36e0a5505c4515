use crate::api::{ApiClient, ApiError, ApprovalRequest};
use crate::pages::dashboard::{
    repository::{DashboardData, DashboardRepository},
    utils::{most_recent, DashboardStats, RECENT_LIMIT},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub data_resource: Resource<u32, Result<DashboardData, ApiError>>,
    reload: RwSignal<u32>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = DashboardRepository::new(api);
        let reload = create_rw_signal(0u32);
        let data_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repository = repository.clone();
                async move {
                    let result = repository.fetch().await;
                    if let Err(err) = &result {
                        log::error!("failed to load dashboard: {}", err);
                    }
                    result
                }
            },
        );
        Self {
            data_resource,
            reload,
        }
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }

    pub fn stats(&self) -> Signal<Option<DashboardStats>> {
        let resource = self.data_resource;
        Signal::derive(move || match resource.get() {
            Some(Ok(data)) => Some(DashboardStats::from_data(&data)),
            _ => None,
        })
    }

    pub fn recent_outbox(&self) -> Signal<Vec<ApprovalRequest>> {
        self.recent(|data| &data.outbox)
    }

    pub fn recent_inbox(&self) -> Signal<Vec<ApprovalRequest>> {
        self.recent(|data| &data.inbox)
    }

    fn recent(
        &self,
        pick: fn(&DashboardData) -> &Vec<ApprovalRequest>,
    ) -> Signal<Vec<ApprovalRequest>> {
        let resource = self.data_resource;
        Signal::derive(move || match resource.get() {
            Some(Ok(data)) => most_recent(pick(&data), RECENT_LIMIT),
            _ => Vec::new(),
        })
    }

    pub fn loading(&self) -> Signal<bool> {
        let resource = self.data_resource;
        Signal::derive(move || resource.loading().get())
    }

    pub fn error(&self) -> Signal<Option<ApiError>> {
        let resource = self.data_resource;
        Signal::derive(move || match resource.get() {
            Some(Err(err)) => Some(err),
            _ => None,
        })
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn derived_signals_are_empty_before_data_arrives() {
        leptos_reactive::suppress_resource_load(true);
        with_runtime(|| {
            let vm = DashboardViewModel::new();
            assert_eq!(vm.stats().get(), None);
            assert!(vm.recent_outbox().get().is_empty());
            assert!(vm.recent_inbox().get().is_empty());
            assert!(vm.error().get().is_none());
        });
        leptos_reactive::suppress_resource_load(false);
    }
}
