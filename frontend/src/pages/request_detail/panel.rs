use crate::components::{
    error::InlineErrorMessage,
    layout::{ErrorMessage, Layout, LoadingSpinner, SuccessMessage},
};
use crate::pages::request_detail::{
    components::{decision::DecisionPanel, history::HistoryTimeline, summary::RequestSummaryCard},
    lifecycle::{Decision, DetailState},
    view_model::RequestDetailViewModel,
};
use crate::utils::navigation::request_id_from_param;
use leptos::*;
use leptos_router::use_params_map;

#[component]
pub fn RequestDetailPage() -> impl IntoView {
    let params = use_params_map();
    let vm = RequestDetailViewModel::new();
    create_effect(move |_| {
        if let Some(id) = params.with(|p| p.get("id").cloned()) {
            vm.load(request_id_from_param(&id));
        }
    });
    view! {
        <Layout>
            <RequestDetailView vm=vm />
        </Layout>
    }
}

#[component]
pub fn RequestDetailView(vm: RequestDetailViewModel) -> impl IntoView {
    let can_act = vm.can_act();
    let message = vm.message;
    let action_error = Signal::derive(move || message.with(|m| m.error.clone()));
    let on_decide = Callback::new(move |decision: Decision| vm.decide(decision));

    view! {
        <div class="space-y-6 max-w-4xl">
            <a href="/" class="text-sm text-fg-muted hover:text-fg">"← Volver"</a>
            <InlineErrorMessage error=action_error />
            {move || {
                message
                    .with(|m| m.success.clone())
                    .map(|msg| view! { <SuccessMessage message=msg /> })
            }}
            {move || match vm.state.get() {
                DetailState::Loading => view! { <LoadingSpinner /> }.into_view(),
                DetailState::Failed(err) => {
                    view! {
                        <div>
                            <ErrorMessage message=err.error />
                            <p class="text-sm text-fg-muted">"No se pudo cargar la solicitud"</p>
                        </div>
                    }
                        .into_view()
                }
                DetailState::Loaded(request) => {
                    let history = request.history.clone();
                    view! {
                        <RequestSummaryCard request=request />
                        <Show when=move || can_act.get()>
                            <DecisionPanel
                                comment=vm.comment
                                pending=vm.pending_decision
                                on_decide=on_decide
                            />
                        </Show>
                        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                            <h2 class="text-lg font-medium text-fg">"Historial"</h2>
                            <HistoryTimeline entries=history />
                        </section>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}
