use crate::api::ApprovalRequest;
use crate::components::{
    empty_state::EmptyState, layout::LoadingSpinner, status_badge::StatusBadge,
};
use crate::utils::{navigation::request_detail_path, time::format_date};
use leptos::*;

#[component]
pub fn RequestsTable(
    #[prop(into)] requests: Signal<Vec<ApprovalRequest>>,
    #[prop(into)] loading: MaybeSignal<bool>,
    #[prop(into)] empty_message: String,
    #[prop(optional)] show_requester: bool,
) -> impl IntoView {
    let empty_message = store_value(empty_message);
    view! {
        <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner /> }>
            <Show
                when=move || !requests.with(Vec::is_empty)
                fallback=move || view! { <EmptyState title=empty_message.get_value() /> }
            >
                <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
                    <table class="min-w-full divide-y divide-border">
                        <thead class="bg-surface-muted">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Título"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Tipo"</th>
                                <Show when=move || show_requester>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Solicitante"</th>
                                </Show>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Estado"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Fecha"</th>
                                <th class="px-6 py-3"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || requests.get()
                                key=|request| request.id.clone()
                                children=move |request: ApprovalRequest| {
                                    let requester = request.requester.name.clone();
                                    view! {
                                        <tr class="hover:bg-surface-muted">
                                            <td class="px-6 py-4 text-sm text-fg">{request.title.clone()}</td>
                                            <td class="px-6 py-4 text-sm text-fg-muted">{request.request_type.name.clone()}</td>
                                            <Show when=move || show_requester>
                                                <td class="px-6 py-4 text-sm text-fg-muted">{requester.clone()}</td>
                                            </Show>
                                            <td class="px-6 py-4 text-sm"><StatusBadge status=request.status /></td>
                                            <td class="px-6 py-4 text-sm text-fg-muted">{format_date(&request.created_at)}</td>
                                            <td class="px-6 py-4 text-sm text-right">
                                                <a class="text-action-primary-bg hover:underline" href=request_detail_path(&request.id)>
                                                    "Ver detalle"
                                                </a>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </Show>
    }
}
