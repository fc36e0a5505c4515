use crate::components::{error::InlineErrorMessage, layout::Layout};
use crate::pages::requests::{
    components::{filter::RequestsFilter, list::RequestsTable},
    utils::RequestListView,
    view_model::RequestsViewModel,
};
use leptos::*;

#[component]
pub fn RequestsPage(view: RequestListView) -> impl IntoView {
    let vm = RequestsViewModel::new(view);
    create_effect(move |_| vm.refresh());

    let state = vm.state;
    let error = Signal::derive(move || state.with(|s| s.error().cloned()));
    let on_refresh = move |_| vm.refresh();

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-start justify-between gap-4">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">{view.title()}</h1>
                        <p class="mt-1 text-sm text-fg-muted">{view.subtitle()}</p>
                    </div>
                    <button
                        class="text-sm text-fg-muted hover:text-fg disabled:opacity-50"
                        on:click=on_refresh
                        disabled=move || state.with(|s| s.is_loading())
                    >
                        "Actualizar"
                    </button>
                </div>
                <RequestsFilter
                    filter_state=vm.filter_state
                    show_status=view.fixed_status().is_none()
                />
                <InlineErrorMessage error=error />
                <RequestsTable
                    requests=vm.visible()
                    loading=vm.loading()
                    empty_message=view.empty_message()
                    show_requester=view.shows_requester()
                />
            </div>
        </Layout>
    }
}

#[component]
pub fn MyRequestsPage() -> impl IntoView {
    view! { <RequestsPage view=RequestListView::MyRequests /> }
}

#[component]
pub fn PendingApprovalPage() -> impl IntoView {
    view! { <RequestsPage view=RequestListView::PendingApproval /> }
}

#[component]
pub fn AssignedToMePage() -> impl IntoView {
    view! { <RequestsPage view=RequestListView::AssignedToMe /> }
}

#[component]
pub fn ApprovedPage() -> impl IntoView {
    view! { <RequestsPage view=RequestListView::Approved /> }
}

#[component]
pub fn RejectedPage() -> impl IntoView {
    view! { <RequestsPage view=RequestListView::Rejected /> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn approved_page_hides_status_selector() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <ApprovedPage /> }
        });
        assert!(html.contains("Solicitudes aprobadas"));
        assert!(!html.contains("Todos los estados"));
    }

    #[test]
    fn my_requests_page_offers_status_selector() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <MyRequestsPage /> }
        });
        assert!(html.contains("Mis solicitudes"));
        assert!(html.contains("Todos los estados"));
    }
}
