use crate::components::{error::InlineErrorMessage, layout::{Layout, SuccessMessage}};
use crate::pages::new_request::{
    components::{form::RequestForm, type_creator::TypeCreator},
    view_model::use_new_request_view_model,
};
use leptos::*;

#[component]
pub fn NewRequestPage() -> impl IntoView {
    let vm = use_new_request_view_model();
    let messages = vm.messages;
    let error = Signal::derive(move || {
        vm.options_error()
            .get()
            .or_else(|| messages.with(|m| m.error.clone()))
    });
    let submitting = vm.submit_action.pending();
    let creating_type = vm.create_type_action.pending();

    view! {
        <Layout>
            <div class="max-w-2xl space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Nueva solicitud"</h1>
                    <p class="mt-1 text-sm text-fg-muted">"Describe lo que necesitas y elige quién debe aprobarlo"</p>
                </div>
                <InlineErrorMessage error=error />
                {move || {
                    messages
                        .with(|m| m.success.clone())
                        .map(|message| view! { <SuccessMessage message=message /> })
                }}
                <RequestForm
                    form=vm.form
                    types=vm.types()
                    approvers=vm.approvers()
                    pending=submitting
                    on_submit=Callback::new(move |_| vm.submit())
                >
                    <TypeCreator
                        name=vm.new_type_name
                        pending=creating_type
                        on_create=Callback::new(move |_| vm.create_type())
                    />
                </RequestForm>
            </div>
        </Layout>
    }
}
