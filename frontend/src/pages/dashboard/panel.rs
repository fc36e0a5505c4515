use crate::components::{error::InlineErrorMessage, layout::Layout};
use crate::pages::dashboard::{
    components::{recent::RecentRequests, summary::StatsSection},
    view_model::DashboardViewModel,
};
use crate::state::auth::use_auth;
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = DashboardViewModel::new();
    let (auth, _) = use_auth();
    let greeting = move || {
        auth.get()
            .user
            .map(|user| format!("Hola, {}", user.name))
            .unwrap_or_else(|| "Hola".to_string())
    };
    let on_refresh = move |_| vm.refresh();

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-start justify-between gap-4">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">{greeting}</h1>
                        <p class="mt-1 text-sm text-fg-muted">"Resumen de tus solicitudes de aprobación"</p>
                    </div>
                    <button
                        class="text-sm text-fg-muted hover:text-fg disabled:opacity-50"
                        on:click=on_refresh
                        disabled=move || vm.loading().get()
                    >
                        "Actualizar"
                    </button>
                </div>
                <InlineErrorMessage error=vm.error() />
                <StatsSection stats=vm.stats() />
                <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                    <RecentRequests
                        title="Mis solicitudes recientes"
                        requests=vm.recent_outbox()
                        empty_message="Todavía no has creado solicitudes"
                        view_all_href="/my-requests"
                    />
                    <RecentRequests
                        title="Pendientes de mi aprobación"
                        requests=vm.recent_inbox()
                        empty_message="No tienes solicitudes pendientes"
                        view_all_href="/pending-approval"
                    />
                </div>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_greeting_and_sections() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <DashboardPage /> }
        });
        assert!(html.contains("Hola, Bruno Díaz"));
        assert!(html.contains("Mis solicitudes recientes"));
        assert!(html.contains("Pendientes de mi aprobación"));
    }
}
