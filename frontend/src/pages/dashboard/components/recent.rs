use crate::api::ApprovalRequest;
use crate::components::{empty_state::EmptyState, status_badge::StatusBadge};
use crate::utils::{navigation::request_detail_path, time::relative_to_now};
use leptos::*;

#[component]
pub fn RecentRequests(
    title: &'static str,
    #[prop(into)] requests: Signal<Vec<ApprovalRequest>>,
    #[prop(into)] empty_message: String,
    view_all_href: &'static str,
) -> impl IntoView {
    let empty_message = store_value(empty_message);
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-base font-semibold text-fg">{title}</h2>
                <a class="text-sm text-action-primary-bg hover:underline" href=view_all_href>"Ver todas"</a>
            </div>
            <Show
                when=move || !requests.with(Vec::is_empty)
                fallback=move || view! { <EmptyState title=empty_message.get_value() /> }
            >
                <ul class="divide-y divide-border">
                    <For
                        each=move || requests.get()
                        key=|request| request.id.clone()
                        children=move |request: ApprovalRequest| {
                            view! {
                                <li class="py-3 flex items-center justify-between gap-4">
                                    <div>
                                        <a class="text-sm font-medium text-fg hover:underline" href=request_detail_path(&request.id)>
                                            {request.title.clone()}
                                        </a>
                                        <p class="text-xs text-fg-muted">
                                            {format!("{} · {}", request.request_type.name, relative_to_now(&request.created_at))}
                                        </p>
                                    </div>
                                    <StatusBadge status=request.status />
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
