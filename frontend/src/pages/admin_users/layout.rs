use leptos::*;

#[component]
pub fn AdminUsersFrame(children: Children) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">"Gestión de usuarios"</h1>
                <p class="mt-1 text-sm text-fg-muted">
                    "Alta de usuarios y asignación de rol."
                </p>
            </div>
            {children()}
        </div>
    }
}
