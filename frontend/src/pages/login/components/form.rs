use crate::{
    api::ApiError,
    components::{common::Button, error::InlineErrorMessage},
    pages::login::utils::LoginFormState,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    form: LoginFormState,
    error: RwSignal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let username = form.username;
    let password = form.password;
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"ApprovalFlow"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">"Iniciar sesión"</p>
                </div>
                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="space-y-3">
                        <div>
                            <label for="username" class="block text-sm font-medium text-fg">"Usuario"</label>
                            <input
                                id="username"
                                name="username"
                                type="text"
                                autocomplete="username"
                                class="mt-1 block w-full px-3 py-2 border border-border rounded-md sm:text-sm"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="password" class="block text-sm font-medium text-fg">"Contraseña"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                autocomplete="current-password"
                                class="mt-1 block w-full px-3 py-2 border border-border rounded-md sm:text-sm"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <InlineErrorMessage error=error />
                    <Button attr:type="submit" class="w-full" loading=pending>
                        {move || if pending.get() { "Entrando..." } else { "Entrar" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
