use super::{
    repository::{FormOptions, NewRequestRepository},
    utils::{approver_candidates, merge_types, normalize_type_name, RequestFormState},
};
use crate::{
    api::{ApiClient, ApiError, CreateApprovalRequest, RequestType, User},
    state::{auth::use_auth, message::MessageState},
    utils::navigation,
};
use leptos::*;

pub const AFTER_SUBMIT_PATH: &str = "/my-requests";

#[derive(Clone, Copy)]
pub struct NewRequestViewModel {
    pub form: RwSignal<RequestFormState>,
    pub new_type_name: RwSignal<String>,
    pub created_types: RwSignal<Vec<RequestType>>,
    pub messages: RwSignal<MessageState>,
    pub options_resource: Resource<(), Result<FormOptions, ApiError>>,
    pub submit_action: Action<CreateApprovalRequest, Result<(), ApiError>>,
    pub create_type_action: Action<String, Result<RequestType, ApiError>>,
    current_user_id: Memo<Option<i64>>,
}

impl NewRequestViewModel {
    pub fn types(&self) -> Signal<Vec<RequestType>> {
        let resource = self.options_resource;
        let created = self.created_types;
        Signal::derive(move || {
            let loaded = match resource.get() {
                Some(Ok(options)) => options.types,
                _ => Vec::new(),
            };
            created.with(|created| merge_types(&loaded, created))
        })
    }

    pub fn approvers(&self) -> Signal<Vec<User>> {
        let resource = self.options_resource;
        let current_user_id = self.current_user_id;
        Signal::derive(move || match resource.get() {
            Some(Ok(options)) => approver_candidates(&options.users, current_user_id.get()),
            _ => Vec::new(),
        })
    }

    pub fn options_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.options_resource;
        Signal::derive(move || match resource.get() {
            Some(Err(err)) => Some(err),
            _ => None,
        })
    }

    /// Validation failures are reported without touching the network.
    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        self.messages.update(MessageState::clear);
        match self.form.with_untracked(RequestFormState::validate) {
            Ok(request) => self.submit_action.dispatch(request),
            Err(err) => self.messages.update(|state| state.set_error(err)),
        }
    }

    pub fn create_type(&self) {
        if self.create_type_action.pending().get_untracked() {
            return;
        }
        let Some(name) = self.new_type_name.with_untracked(|raw| normalize_type_name(raw)) else {
            return;
        };
        self.create_type_action.dispatch(name);
    }
}

fn apply_created_type(
    created: RequestType,
    created_types: RwSignal<Vec<RequestType>>,
    form: RwSignal<RequestFormState>,
    new_type_name: RwSignal<String>,
    messages: RwSignal<MessageState>,
) {
    let id = created.id;
    messages.update(|state| state.set_success(format!("Tipo '{}' creado", created.name)));
    created_types.update(|types| types.push(created));
    form.update(|state| state.type_id = Some(id));
    new_type_name.set(String::new());
}

pub fn use_new_request_view_model() -> NewRequestViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = NewRequestRepository::new(api);
    let (auth, _) = use_auth();
    let current_user_id = create_memo(move |_| auth.with(|state| state.user.as_ref().map(|u| u.id)));

    let form = create_rw_signal(RequestFormState::default());
    let new_type_name = create_rw_signal(String::new());
    let created_types = create_rw_signal(Vec::<RequestType>::new());
    let messages = create_rw_signal(MessageState::default());

    let repo_for_options = repository.clone();
    let options_resource = create_resource(
        || (),
        move |_| {
            let repo = repo_for_options.clone();
            async move {
                let result = repo.fetch_options().await;
                if let Err(err) = &result {
                    log::error!("failed to load request form options: {}", err);
                }
                result
            }
        },
    );

    let repo_for_submit = repository.clone();
    let submit_action = create_action(move |request: &CreateApprovalRequest| {
        let repo = repo_for_submit.clone();
        let request = request.clone();
        async move { repo.submit(request).await }
    });

    let repo_for_type = repository.clone();
    let create_type_action = create_action(move |name: &String| {
        let repo = repo_for_type.clone();
        let name = name.clone();
        async move { repo.create_type(name).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(()) => navigation::redirect_to(AFTER_SUBMIT_PATH),
                Err(err) => {
                    log::error!("failed to create request: {}", err);
                    messages.update(|state| state.set_error(err));
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = create_type_action.value().get() {
            match result {
                Ok(created) => {
                    apply_created_type(created, created_types, form, new_type_name, messages)
                }
                Err(err) => messages.update(|state| state.set_error(err)),
            }
        }
    });

    NewRequestViewModel {
        form,
        new_type_name,
        created_types,
        messages,
        options_resource,
        submit_action,
        create_type_action,
        current_user_id,
    }
}
