use crate::api::RequestStatus;
use crate::pages::requests::utils::RequestFilterState;
use crate::state::list::StatusFilter;
use leptos::*;

#[component]
pub fn RequestsFilter(
    filter_state: RequestFilterState,
    #[prop(default = true)] show_status: bool,
) -> impl IntoView {
    let search = filter_state.search;
    let status = filter_state.status;
    view! {
        <div class="flex flex-col gap-3 sm:flex-row sm:items-center">
            <input
                type="search"
                class="w-full sm:w-72 border border-border rounded-md px-3 py-2 text-sm"
                placeholder="Buscar por título, solicitante o tipo"
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <Show when=move || show_status>
                <select
                    class="border border-border rounded-md px-3 py-2 text-sm"
                    prop:value=move || status.get().as_param()
                    on:change=move |ev| status.set(StatusFilter::from_param(&event_target_value(&ev)))
                >
                    <option value="">"Todos los estados"</option>
                    {RequestStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.id().to_string()>{s.wire_name()}</option> })
                        .collect_view()}
                </select>
            </Show>
        </div>
    }
}
