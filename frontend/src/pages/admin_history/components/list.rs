use crate::api::HistoryEntry;
use crate::components::{
    empty_state::{EmptyState, NO_RESULTS},
    layout::LoadingSpinner,
    status_badge::StatusBadge,
};
use crate::utils::{
    navigation::request_detail_path,
    time::{format_date_time, short_id},
};
use leptos::*;

#[component]
pub fn HistoryList(
    #[prop(into)] entries: Signal<Vec<HistoryEntry>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner /> }>
            <Show
                when=move || !entries.with(Vec::is_empty)
                fallback=|| view! { <EmptyState title=NO_RESULTS /> }
            >
                <ul class="bg-surface-elevated shadow rounded-lg divide-y divide-border">
                    <For
                        each=move || entries.get()
                        key=|entry| entry.id.clone()
                        children=move |entry: HistoryEntry| view! { <HistoryRow entry=entry /> }
                    />
                </ul>
            </Show>
        </Show>
    }
}

#[component]
fn HistoryRow(entry: HistoryEntry) -> impl IntoView {
    let request_link = entry.request.clone().map(|request| {
        view! {
            <a class="text-sm font-medium text-action-primary-bg hover:underline" href=request_detail_path(&request.id)>
                {request.title}
            </a>
            <span class="ml-2 text-xs text-fg-muted">{format!("#{}", short_id(&request.id))}</span>
        }
    });
    view! {
        <li class="px-6 py-4 flex items-start justify-between gap-4">
            <div class="space-y-1">
                <div>{request_link}</div>
                <p class="text-sm text-fg">{entry.actor.name.clone()}</p>
                {entry.comment.clone().map(|comment| view! {
                    <p class="text-sm text-fg-muted italic">{comment}</p>
                })}
                <p class="text-xs text-fg-muted">{format_date_time(&entry.changed_at)}</p>
            </div>
            <StatusBadge status=entry.status />
        </li>
    }
}
