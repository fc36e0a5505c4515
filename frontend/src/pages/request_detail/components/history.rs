use crate::api::HistoryEntry;
use crate::components::status_badge::StatusBadge;
use crate::utils::time::{format_date_time, relative_to_now};
use leptos::*;

#[component]
pub fn HistoryTimeline(entries: Vec<HistoryEntry>) -> impl IntoView {
    if entries.is_empty() {
        return view! { <p class="text-sm text-fg-muted">"Sin movimientos registrados"</p> }
            .into_view();
    }
    view! {
        <ol class="space-y-4">
            {entries
                .into_iter()
                .map(|entry| {
                    view! {
                        <li class="border-l-2 border-border pl-4">
                            <div class="flex items-center gap-2">
                                <StatusBadge status=entry.status />
                                <span class="text-sm font-medium text-fg">{entry.actor.name.clone()}</span>
                            </div>
                            <p class="text-xs text-fg-muted" title=format_date_time(&entry.changed_at)>
                                {relative_to_now(&entry.changed_at)}
                            </p>
                            {entry
                                .comment
                                .filter(|comment| !comment.trim().is_empty())
                                .map(|comment| view! { <p class="mt-1 text-sm text-fg">{comment}</p> })}
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
    .into_view()
}
