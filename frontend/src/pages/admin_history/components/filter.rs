use crate::api::RequestStatus;
use crate::components::common::{Button, ButtonVariant};
use crate::state::list::{ListFilter, StatusFilter};
use leptos::{ev, *};

#[component]
pub fn HistoryFilter(
    draft: RwSignal<ListFilter>,
    on_apply: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_apply.call(());
    };
    view! {
        <form class="bg-surface-elevated p-4 rounded-lg shadow flex flex-col gap-3 md:flex-row md:items-end" on:submit=on_submit>
            <div class="flex-1">
                <label class="block text-sm font-medium text-fg">"Buscar"</label>
                <input
                    type="search"
                    class="mt-1 w-full border border-border rounded-md px-3 py-2 text-sm"
                    placeholder="Solicitud, usuario o comentario"
                    prop:value=move || draft.with(|f| f.search.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|f| f.search = value);
                    }
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-fg">"Estado"</label>
                <select
                    class="mt-1 border border-border rounded-md px-3 py-2 text-sm"
                    prop:value=move || draft.with(|f| f.status.as_param())
                    on:change=move |ev| {
                        let status = StatusFilter::from_param(&event_target_value(&ev));
                        draft.update(|f| f.status = status);
                    }
                >
                    <option value="">"Todos los estados"</option>
                    {RequestStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.id().to_string()>{s.wire_name()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="flex gap-2">
                <Button attr:type="submit">"Filtrar"</Button>
                <Button
                    variant=ButtonVariant::Secondary
                    attr:type="button"
                    on:click=move |_| on_clear.call(())
                >
                    "Limpiar"
                </Button>
            </div>
        </form>
    }
}
