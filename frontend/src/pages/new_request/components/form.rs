use crate::{
    api::{RequestType, User},
    components::common::Button,
    pages::new_request::utils::{parse_selection, RequestFormState},
};
use leptos::{ev, *};

#[component]
pub fn RequestForm(
    form: RwSignal<RequestFormState>,
    #[prop(into)] types: Signal<Vec<RequestType>>,
    #[prop(into)] approvers: Signal<Vec<User>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    children: Children,
) -> impl IntoView {
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };
    let selected = |value: Option<i64>| value.map(|id| id.to_string()).unwrap_or_default();

    view! {
        <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=handle_submit>
            <div>
                <label class="block text-sm font-medium text-fg">"Título"</label>
                <input
                    class="mt-1 w-full border border-border rounded px-2 py-1"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.title = value);
                    }
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-fg">"Descripción"</label>
                <textarea
                    class="mt-1 w-full border border-border rounded px-2 py-1"
                    rows="4"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.description = value);
                    }
                ></textarea>
            </div>
            <div>
                <label class="block text-sm font-medium text-fg">"Tipo de solicitud"</label>
                <select
                    class="mt-1 w-full border border-border rounded px-2 py-1"
                    prop:value=move || form.with(|f| selected(f.type_id))
                    on:change=move |ev| {
                        let type_id = parse_selection(&event_target_value(&ev));
                        form.update(|f| f.type_id = type_id);
                    }
                >
                    <option value="">"Selecciona un tipo"</option>
                    <For
                        each=move || types.get()
                        key=|item| item.id
                        children=move |item: RequestType| {
                            view! { <option value=item.id.to_string()>{item.name}</option> }
                        }
                    />
                </select>
            </div>
            {children()}
            <div>
                <label class="block text-sm font-medium text-fg">"Aprobador"</label>
                <select
                    class="mt-1 w-full border border-border rounded px-2 py-1"
                    prop:value=move || form.with(|f| selected(f.approver_id))
                    on:change=move |ev| {
                        let approver_id = parse_selection(&event_target_value(&ev));
                        form.update(|f| f.approver_id = approver_id);
                    }
                >
                    <option value="">"Selecciona un aprobador"</option>
                    <For
                        each=move || approvers.get()
                        key=|user| user.id
                        children=move |user: User| {
                            view! { <option value=user.id.to_string()>{user.name}</option> }
                        }
                    />
                </select>
            </div>
            <Button attr:type="submit" loading=pending>
                "Enviar solicitud"
            </Button>
        </form>
    }
}
