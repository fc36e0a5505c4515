use crate::components::{error::InlineErrorMessage, guard::RequireAdmin, layout::Layout};
use crate::pages::admin_history::{
    components::{filter::HistoryFilter, list::HistoryList},
    view_model::AdminHistoryViewModel,
};
use crate::state::list::ListState;
use leptos::*;

#[component]
pub fn AdminHistoryPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            {|| view! { <AdminHistoryContent /> }}
        </RequireAdmin>
    }
}

#[component]
fn AdminHistoryContent() -> impl IntoView {
    let vm = AdminHistoryViewModel::new();
    create_effect(move |_| vm.refresh());

    let state = vm.state;
    let error = Signal::derive(move || state.with(|s| s.error().cloned()));
    let loading = Signal::derive(move || state.with(|s| matches!(s, ListState::Idle | ListState::Loading)));

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Historial global"</h1>
                    <p class="mt-1 text-sm text-fg-muted">"Todos los cambios de estado registrados"</p>
                </div>
                <HistoryFilter
                    draft=vm.draft
                    on_apply=Callback::new(move |_| vm.apply_filter())
                    on_clear=Callback::new(move |_| vm.clear_filter())
                />
                <InlineErrorMessage error=error />
                <HistoryList entries=vm.visible() loading=loading />
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn admin_sees_filter_form() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <AdminHistoryPage /> }
        });
        assert!(html.contains("Historial global"));
        assert!(html.contains("Filtrar"));
    }

    #[test]
    fn non_admin_renders_nothing() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <AdminHistoryPage /> }
        });
        assert!(!html.contains("Filtrar"));
    }
}
