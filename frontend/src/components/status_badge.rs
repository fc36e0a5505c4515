use crate::api::RequestStatus;
use leptos::*;

pub fn status_badge_class(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "bg-status-warning-bg text-status-warning-text",
        RequestStatus::Approved => "bg-status-success-bg text-status-success-text",
        RequestStatus::Rejected => "bg-status-error-bg text-status-error-text",
    }
}

#[component]
pub fn StatusBadge(status: RequestStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {}",
            status_badge_class(status)
        )>
            {status.wire_name()}
        </span>
    }
}
