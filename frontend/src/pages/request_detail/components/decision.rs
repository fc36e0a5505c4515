use crate::components::common::{Button, ButtonVariant};
use crate::pages::request_detail::lifecycle::Decision;
use leptos::*;

#[component]
pub fn DecisionPanel(
    comment: RwSignal<String>,
    #[prop(into)] pending: Signal<Option<Decision>>,
    on_decide: Callback<Decision>,
) -> impl IntoView {
    let busy = Signal::derive(move || pending.get().is_some());
    let is_pending = move |decision: Decision| Signal::derive(move || pending.get() == Some(decision));
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-medium text-fg">"Tu decisión"</h2>
            <textarea
                class="w-full border border-border rounded-md px-3 py-2 text-sm"
                rows="3"
                placeholder="Comentario (opcional)"
                prop:value=move || comment.get()
                on:input=move |ev| comment.set(event_target_value(&ev))
            ></textarea>
            <div class="flex gap-3">
                <Button
                    variant=ButtonVariant::Approve
                    disabled=busy
                    loading=is_pending(Decision::Approve)
                    on:click=move |_| on_decide.call(Decision::Approve)
                >
                    {Decision::Approve.label()}
                </Button>
                <Button
                    variant=ButtonVariant::Reject
                    disabled=busy
                    loading=is_pending(Decision::Reject)
                    on:click=move |_| on_decide.call(Decision::Reject)
                >
                    {Decision::Reject.label()}
                </Button>
            </div>
        </div>
    }
}
