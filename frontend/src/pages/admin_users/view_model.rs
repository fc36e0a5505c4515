use super::{repository::AdminUsersRepository, utils::UserFormState};
use crate::{
    api::{ApiClient, ApiError, CreateUser, User},
    state::message::MessageState,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AdminUsersViewModel {
    pub form: RwSignal<UserFormState>,
    pub messages: RwSignal<MessageState>,
    pub users_resource: Resource<u32, Result<Vec<User>, ApiError>>,
    pub create_action: Action<CreateUser, Result<String, ApiError>>,
}

impl AdminUsersViewModel {
    pub fn submit(&self) {
        self.messages.update(MessageState::clear);
        if self.create_action.pending().get_untracked() {
            return;
        }
        match self.form.get_untracked().to_request() {
            Ok(request) => self.create_action.dispatch(request),
            Err(err) => self.messages.update(|state| state.set_error(err)),
        }
    }

    pub fn users(&self) -> Signal<Vec<User>> {
        let resource = self.users_resource;
        Signal::derive(move || match resource.get() {
            Some(Ok(users)) => users,
            _ => Vec::new(),
        })
    }

    pub fn fetch_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.users_resource;
        Signal::derive(move || match resource.get() {
            Some(Err(err)) => Some(err),
            _ => None,
        })
    }
}

/// Applies a finished create: success resets the form and reloads the list.
fn apply_create_result(
    result: Result<String, ApiError>,
    form: RwSignal<UserFormState>,
    messages: RwSignal<MessageState>,
    users_reload: RwSignal<u32>,
) {
    match result {
        Ok(username) => {
            messages.update(|state| {
                state.set_success(format!("Usuario '{}' creado correctamente", username));
            });
            form.update(UserFormState::reset);
            users_reload.update(|value| *value = value.wrapping_add(1));
        }
        Err(err) => {
            log::error!("failed to create user: {}", err);
            messages.update(|state| state.set_error(err));
        }
    }
}

pub fn use_admin_users_view_model() -> AdminUsersViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AdminUsersRepository::new_with_client(Rc::new(api));

    let form = create_rw_signal(UserFormState::default());
    let messages = create_rw_signal(MessageState::default());
    let users_reload = create_rw_signal(0u32);

    let repo_for_resource = repository.clone();
    let users_resource = create_resource(
        move || users_reload.get(),
        move |_reload| {
            let repo = repo_for_resource.clone();
            async move { repo.fetch_users().await }
        },
    );

    let repo_for_create = repository.clone();
    let create_action = create_action(move |payload: &CreateUser| {
        let repo = repo_for_create.clone();
        let payload = payload.clone();
        async move {
            let username = payload.username.clone();
            repo.create_user(payload).await.map(|_| username)
        }
    });

    create_effect(move |_| {
        if let Some(result) = create_action.value().get() {
            apply_create_result(result, form, messages, users_reload);
        }
    });

    AdminUsersViewModel {
        form,
        messages,
        users_resource,
        create_action,
    }
}
