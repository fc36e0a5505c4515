use crate::{
    api::{ApiError, User},
    components::{empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner},
};
use leptos::*;

#[component]
pub fn UserList(
    #[prop(into)] users: Signal<Vec<User>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] fetch_error: Signal<Option<ApiError>>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-medium text-fg">"Usuarios registrados"</h3>

            <InlineErrorMessage error=fetch_error />
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <Show when=move || !loading.get() && users.with(Vec::is_empty) && fetch_error.with(Option::is_none)>
                <EmptyState title="No hay usuarios registrados" />
            </Show>
            <Show when=move || !users.with(Vec::is_empty)>
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Nombre"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Usuario"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Email"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Rol"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || users.get()
                            key=|user| user.id
                            children=move |user: User| {
                                view! {
                                    <tr>
                                        <td class="px-4 py-2 text-sm text-fg">{user.name}</td>
                                        <td class="px-4 py-2 text-sm text-fg-muted">{user.username}</td>
                                        <td class="px-4 py-2 text-sm text-fg-muted">{user.email}</td>
                                        <td class="px-4 py-2 text-sm text-fg-muted">{user.role.name}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
