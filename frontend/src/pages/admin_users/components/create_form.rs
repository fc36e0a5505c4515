use crate::{
    components::{error::InlineErrorMessage, layout::SuccessMessage},
    pages::admin_users::{
        utils::{parse_role, ROLE_OPTIONS},
        view_model::AdminUsersViewModel,
    },
};
use leptos::{ev, *};

#[component]
pub fn CreateUserForm(vm: AdminUsersViewModel) -> impl IntoView {
    let form_state = vm.form;
    let messages = vm.messages;
    let pending = vm.create_action.pending();
    let error = Signal::derive(move || messages.with(|m| m.error.clone()));
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-medium text-fg">"Nuevo usuario"</h2>

            <InlineErrorMessage error=error />
            {move || {
                messages
                    .with(|m| m.success.clone())
                    .map(|message| view! { <SuccessMessage message=message /> })
            }}

            <form class="grid grid-cols-1 md:grid-cols-2 gap-4" on:submit=on_submit>
                <div>
                    <label class="block text-sm font-medium text-fg">"Nombre"</label>
                    <input
                        class="mt-1 w-full border border-border rounded px-2 py-1"
                        placeholder="Nombre completo"
                        prop:value=move || form_state.with(|s| s.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form_state.update(|state| state.name = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"Usuario"</label>
                    <input
                        class="mt-1 w-full border border-border rounded px-2 py-1"
                        placeholder="username"
                        prop:value=move || form_state.with(|s| s.username.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form_state.update(|state| state.username = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"Email"</label>
                    <input
                        type="email"
                        class="mt-1 w-full border border-border rounded px-2 py-1"
                        prop:value=move || form_state.with(|s| s.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form_state.update(|state| state.email = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"Contraseña"</label>
                    <input
                        type="password"
                        class="mt-1 w-full border border-border rounded px-2 py-1"
                        prop:value=move || form_state.with(|s| s.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form_state.update(|state| state.password = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"Rol"</label>
                    <select
                        class="mt-1 w-full border border-border rounded px-2 py-1"
                        prop:value=move || form_state.with(|s| s.role_id.to_string())
                        on:change=move |ev| {
                            let role_id = parse_role(&event_target_value(&ev));
                            form_state.update(|state| state.role_id = role_id);
                        }
                    >
                        {ROLE_OPTIONS
                            .into_iter()
                            .map(|(id, label)| view! { <option value=id.to_string()>{label}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="md:col-span-2">
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="px-4 py-2 bg-action-primary-bg text-action-primary-text rounded disabled:opacity-50"
                    >
                        {move || if pending.get() { "Creando..." } else { "Crear usuario" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
