use crate::components::common::{Button, ButtonVariant};
use leptos::*;

#[component]
pub fn TypeCreator(
    name: RwSignal<String>,
    #[prop(into)] pending: Signal<bool>,
    on_create: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex gap-2 items-end">
            <div class="flex-1">
                <label class="block text-xs font-medium text-fg-muted">"¿No encuentras el tipo? Créalo"</label>
                <input
                    class="mt-1 w-full border border-border rounded px-2 py-1 text-sm"
                    placeholder="Nombre del nuevo tipo"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>
            <Button
                variant=ButtonVariant::Secondary
                attr:type="button"
                loading=pending
                on:click=move |_| on_create.call(())
            >
                "Crear tipo"
            </Button>
        </div>
    }
}
