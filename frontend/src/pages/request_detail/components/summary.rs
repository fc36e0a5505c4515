use crate::api::ApprovalRequest;
use crate::components::status_badge::StatusBadge;
use crate::utils::time::{format_date_time, short_id};
use leptos::*;

#[component]
pub fn RequestSummaryCard(request: ApprovalRequest) -> impl IntoView {
    let approvers = request.approver_names();
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex items-start justify-between gap-4">
                <div>
                    <p class="text-xs text-fg-muted">{format!("#{}", short_id(&request.id))}</p>
                    <h1 class="text-2xl font-bold text-fg">{request.title.clone()}</h1>
                </div>
                <StatusBadge status=request.status />
            </div>
            <p class="text-sm text-fg whitespace-pre-line">{request.description.clone()}</p>
            <dl class="grid grid-cols-1 gap-4 sm:grid-cols-2 text-sm">
                <div>
                    <dt class="text-fg-muted">"Tipo"</dt>
                    <dd class="text-fg">{request.request_type.name.clone()}</dd>
                </div>
                <div>
                    <dt class="text-fg-muted">"Solicitante"</dt>
                    <dd class="text-fg">{request.requester.name.clone()}</dd>
                </div>
                <div>
                    <dt class="text-fg-muted">"Aprobadores"</dt>
                    <dd class="text-fg">{approvers}</dd>
                </div>
                <div>
                    <dt class="text-fg-muted">"Creada"</dt>
                    <dd class="text-fg">{format_date_time(&request.created_at)}</dd>
                </div>
            </dl>
        </div>
    }
}
